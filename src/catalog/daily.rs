/// Rotating home-screen messages
///
/// Greetings use `{name}` as the placeholder for the user's display name.

pub const GREETINGS: &[&str] = &[
    "As-salamu alaikum, {name} 🌸",
    "Peace be upon you, {name} 🌷",
    "Welcome back, {name} 🌺",
    "Hey {name} 🧕 Ready to recharge?",
    "May your day be soft and sacred 🌼",
    "Salam {name}! You’re doing amazing 💫",
    "Welcome, lovely soul 🌿",
    "{name}, you are light in motion 🕊️",
    "Hi {name}! Your softness is your strength ✨",
    "You’re enough, {name} 🤍",
    "So glad you’re here 🌙",
    "Welcome back, beautiful 🌸",
    "You are safe here, {name} 💐",
    "Hey hey {name}! 🌞",
    "Your journey is valid and sacred 📿",
];

pub const VERSES: &[&str] = &[
    "\"Indeed, with hardship comes ease.\" — Qur'an 94:6",
    "\"And He found you lost and guided [you].\" — Qur'an 93:7",
    "\"Unquestionably, by the remembrance of Allah hearts are assured.\" — Qur'an 13:28",
    "\"Verily, after every difficulty there is relief.\" — Qur'an 94:5",
    "\"So remember Me; I will remember you.\" — Qur'an 2:152",
    "\"My mercy encompasses all things.\" — Qur'an 7:156",
    "\"He is with you wherever you are.\" — Qur'an 57:4",
    "\"Do not despair of the mercy of Allah.\" — Qur'an 39:53",
    "\"Your Lord has not forsaken you.\" — Qur'an 93:3",
    "\"Allah does not burden a soul beyond that it can bear.\" — Qur'an 2:286",
    "\"He knows what is within the hearts.\" — Qur'an 11:5",
    "\"Put your trust in Allah.\" — Qur'an 3:159",
    "\"He created you in stages.\" — Qur'an 71:14",
    "\"He is the best of planners.\" — Qur'an 3:54",
    "\"And We know what his soul whispers to him.\" — Qur'an 50:16",
];

pub const CARE_TIPS: &[&str] = &[
    "Breathe deeply for 10 seconds 🫧",
    "Rest your jaw and shoulders 🌿",
    "Sip something warm 🥣",
    "Grant yourself permission to slow down 🕊️",
    "Take 3 mindful breaths 🌬️",
    "Stretch your arms ☁️",
    "Drink a full glass of water 💧",
    "Text someone comforting 🫂",
    "Blanket + eye rest 🛌",
    "Light a candle & recite a du’a 🕯️",
    "Smile at yourself in the mirror 😌",
    "Name 3 blessings 🍃",
    "Open a window for fresh air 🌬️",
    "Pause multitasking. Just be 🌙",
    "Whisper a peace-giving du’a 📿",
];

pub const WORSHIP_REMINDERS: &[&str] = &[
    "You’re still deeply connected to Allah — even when you’re not praying. Du’a, dhikr, and intention are powerful forms of worship 💞",
    "Every whisper of du’a reaches the One who hears all 📿",
    "Your rest can be an act of worship when paired with gratitude 🌙",
    "Silent dhikr still polishes the heart ✨",
    "Allah sees the tears you don’t explain 🤲",
    "You're worshiping by just trying, even in small ways 💖",
    "Your heart turning toward Allah is worship itself 💫",
    "Even your pain is not lost on Allah — keep going 🤍",
    "Praying with a heavy heart is still prayer 🕊️",
    "Your cycle is sacred. Honor it. Reflect. You are still beloved 💐",
];

pub const JUST_FOR_ME: &[&str] = &[
    "✨ Close your eyes and take 3 deep breaths.",
    "📿 Say “Alhamdulillah” for something tiny.",
    "📝 Journal: “What does my body need today?”",
    "💖 Reminder: Rest is a mercy, not a weakness.",
    "📖 Listen to Surah Ad-Duha for comfort.",
    "🕯️ Light a candle and be still.",
    "🌧️ Sit by a window for 2 minutes.",
    "🥰 Whisper: “I am worthy of gentleness.”",
    "🙏 Hand on heart, say “Bismillah.”",
    "🌺 Do nothing for 60 seconds — that’s enough.",
    "📿 Say SubhanAllah 33 times.",
    "🤲 Ask Allah for exactly what you need.",
    "🌈 Imagine yourself wrapped in divine mercy.",
    "🍯 Make yourself a tiny treat or tea.",
    "🎧 Play your favourite Qur’an recitation.",
];

/// Name used when the user has not introduced themselves yet
pub const FALLBACK_NAME: &str = "friend";

/// Pick an entry by seed, wrapping around the list
pub fn pick(items: &'static [&'static str], seed: u64) -> &'static str {
    if items.is_empty() {
        return "";
    }
    items[(seed % items.len() as u64) as usize]
}

/// Fill the `{name}` placeholder
pub fn personalize(template: &str, name: Option<&str>) -> String {
    let name = name.map(str::trim).filter(|n| !n.is_empty()).unwrap_or(FALLBACK_NAME);
    template.replace("{name}", name)
}
