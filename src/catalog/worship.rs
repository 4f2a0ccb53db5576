/// Worship content: dhikr, du'as, verses, hadith, salawat and companion stories

use crate::catalog::{CompanionStory, Quote, Remembrance, Salawat};

/// (text, arabic, theme)
const DHIKR: &[(&str, &str, &str)] = &[
    ("SubhanAllah (33x)", "سُبْحَانَ ٱللَّٰه", "praise"),
    ("Alhamdulillah (33x)", "ٱلْـحَـمْـدُ للهِ", "gratitude"),
    ("Allahu Akbar (34x)", "ٱللَّٰهُ أَكْبَر", "glorification"),
    ("Astaghfirullah", "أَسْتَغْفِرُ ٱللّٰه", "forgiveness"),
    ("La ilaha illallah", "لَا إِلٰهَ إِلَّا ٱللَّٰه", "faith"),
    ("HasbunAllahu wa ni'mal wakeel", "حَسْبُنَا ٱللَّهُ وَنِعْمَ ٱلْوَكِيلُ", "reliance"),
    ("La hawla wa la quwwata illa billah", "لَا حَوْلَ وَلَا قُوَّةَ إِلَّا بِاللَّٰه", "resilience"),
    ("Ya Rahman, Ya Raheem", "يَا رَحْمَٰنُ، يَا رَحِيم", "names"),
    ("Ya Allah, forgive me", "يَا ٱللّٰهُ اغْفِرْ لِي", "forgiveness"),
    ("Ya Lateef, make it easy for me", "يَا لَطِيفُ، يَسِّرْ لِي", "ease"),
    ("SubhanAllahi wa bihamdihi", "سُبْحَانَ ٱللَّهِ وَبِحَمْدِهِ", "praise"),
    ("SubhanAllahi-l-azeem", "سُبْحَانَ ٱللَّهِ الْعَظِيمِ", "praise"),
    ("Bismillah", "بِسْمِ ٱللَّٰهِ", "beginning"),
    ("Ya Fattah, open doors for me", "يَا فَتَّاحُ، ٱفْتَحْ لِي أَبْوَابَ ٱلْخَيْرِ", "openness"),
    ("Ya Salam, envelope me in peace", "يَا سَلَامُ، ٱحُطْنِي بِٱلسَّلَامِ", "peace"),
    ("Rabbi zidni ilma", "رَبِّ زِدْنِي عِلْمًا", "knowledge"),
    ("Ya Wadud, fill my heart with love", "يَا وَدُودُ، ٱمْلَأْ قَلْبِي حُبًّا", "love"),
];

/// (text, arabic, theme)
const DUAS: &[(&str, &str, &str)] = &[
    ("O Allah, make this a means of purification.", "اللَّهُمَّ اجْعَلْهُ سَبَبًا لِلتَّطْهِيرِ", "healing"),
    ("Ya Shafi, grant me strength and softness today.", "يَا شَافِي، أَعْطِنِي قُوَّةً وَلِينًا", "strength"),
    ("O Turner of hearts, keep my heart firm upon Your religion.", "يَا مُقَلِّبَ الْقُلُوبِ، ثَبِّتْ قَلْبِي عَلَى دِينِكَ", "faith"),
    ("O Allah, You love to forgive — so forgive me.", "اللَّهُمَّ إِنَّكَ عَفُوٌّ تُحِبُّ الْعَفْوَ فَاعْفُ عَنِّي", "forgiveness"),
    ("O Allah, grant me peace within myself.", "اللَّهُمَّ أَنْزِلْ السَّكِينَةَ فِي قَلْبِي", "peace"),
    ("Help me show gentleness to myself today.", "اللَّهُمَّ أَعِنِّي عَلَى لِينِ الذَّاتِ", "gentleness"),
    ("Wrap me in Your mercy, Ya Rahman.", "يَا رَحْمَٰنُ، ٱغْمُرْنِي بِرَحْمَتِكَ", "mercy"),
    ("Guide my heart, soothe my soul.", "ٱهْدِ قَلْبِي وَهَدِّئْ نَفْسِي", "guidance"),
    ("O Allah, replace my fear with trust in You.", "ٱللَّهُمَّ ٱسْتَبْدِلْ خَوْفِي بِثِقَةٍ فِيكَ", "trust"),
    ("Grant me serenity in this sacred pause.", "ٱللَّهُمَّ ٱمْنَحْنِي ٱلسَّكِينَةَ فِي هَذَا ٱلْوَقْتِ ٱلْمُقَدَّسِ", "peace"),
    ("O Allah, grant me clarity and calmness.", "ٱللَّهُمَّ ٱرْزُقْنِي ٱلْوُضُوحَ وَٱلْهُدُوءَ", "clarity"),
    ("Strengthen my faith in moments of doubt.", "ٱللَّهُمَّ قَوِّ إِيمَانِي فِي لَحَظَاتِ ٱلشَّكِّ", "faith"),
    ("Ya Noor, bring light into my darkness.", "يَا نُورُ، أَنْرِ دَاخِلِي فِي ٱلظَّلَامِ", "light"),
    ("O Allah, calm the noise inside me.", "ٱللَّهُمَّ ٱسْكِتْ ٱلضَّجِيجَ دَاخِلِي", "tranquility"),
    ("Make me content with what You’ve given me.", "ٱللَّهُمَّ ٱجْعَلْنِي رَاضِيًا بِمَا قَسَمْتَ لِي", "contentment"),
];

/// (text, arabic, reference)
const QURAN_VERSES: &[(&str, &str, &str)] = &[
    ("Indeed, with hardship comes ease.", "فَإِنَّ مَعَ ٱلْعُسْرِ يُسْرًا", "94:6"),
    ("Your Lord has not forsaken you.", "مَا وَدَّعَكَ رَبُّكَ وَمَا قَلَىٰ", "93:3"),
    ("Allah does not burden a soul beyond that it can bear.", "لَا يُكَلِّفُ ٱللَّهُ نَفْسًا إِلَّا وُسْعَهَا", "2:286"),
    ("He is with you wherever you are.", "وَهُوَ مَعَكُمْ أَيْنَ مَا كُنتُمْ", "57:4"),
    ("Put your trust in Allah.", "فَتَوَكَّلْ عَلَى ٱللَّهِ", "3:159"),
    ("So remember Me; I will remember you.", "فَٱذْكُرُونِي أَذْكُرْكُمْ", "2:152"),
    ("Do not despair of the mercy of Allah.", "لَا تَقْنَطُوا مِن رَّحْمَةِ ٱللَّهِ", "39:53"),
    ("He knows what is within the hearts.", "يَعْلَمُ خَائِنَةَ ٱلْأَعْيُنِ وَمَا تُخْفِي ٱلصُّدُورُ", "11:5"),
    ("He created you in stages.", "وَقَدْ خَلَقَكُمْ أَطْوَارًا", "71:14"),
    ("Verily, after every difficulty there is relief.", "إِنَّ مَعَ ٱلْعُسْرِ يُسْرًا", "94:5"),
    ("My mercy encompasses all things.", "وَرَحْمَتِي وَسِعَتْ كُلَّ شَيْءٍ", "7:156"),
    ("And He found you lost and guided [you].", "وَوَجَدَكَ ضَالًّا فَهَدَىٰ", "93:7"),
    ("Indeed, Allah is with those who are patient.", "إِنَّ ٱللَّهَ مَعَ ٱلصَّابِرِينَ", "2:153"),
    ("And whoever relies upon Allah – then He is sufficient for him.", "وَمَن يَتَوَكَّلْ عَلَى ٱللَّهِ فَهُوَ حَسْبُهُ", "65:3"),
    ("He knows what every soul earns.", "وَيَعْلَمُ مَا كَسَبَتْ كُلُّ نَفْسٍ", "31:34"),
];

/// (text, arabic, reference)
const HADITH: &[(&str, &str, &str)] = &[
    ("Actions are judged by intentions.", "إِنَّمَا الأَعْمَالُ بِالنِّيَّاتِ", "Bukhari & Muslim"),
    ("There is reward for every act of kindness.", "فِي كُلِّ كَبِدٍ رَطْبَةٍ أَجْرٌ", "Muslim"),
    ("The most beloved deeds to Allah are those done consistently.", "أَحَبُّ الأَعْمَالِ إِلَى اللَّهِ أَدْوَمُهَا وَإِنْ قَلَّ", "Bukhari"),
    ("Smiling at your brother is charity.", "تَبَسُّمُكَ فِي وَجْهِ أَخِيكَ لَكَ صَدَقَةٌ", "Tirmidhi"),
    ("Allah is gentle and loves gentleness.", "إِنَّ اللَّهَ رَفِيقٌ يُحِبُّ الرِّفْقَ", "Muslim"),
    ("Whoever relieves a burden from a believer, Allah will relieve a burden from them.", "مَنْ فَرَّجَ عَنْ مُؤْمِنٍ كُرْبَةً، فَرَّجَ اللَّهُ عَنْهُ", "Muslim"),
    ("Supplication is the essence of worship.", "الدُّعَاءُ مُخُّ الْعِبَادَةِ", "Tirmidhi"),
    ("The strong is not the one who overcomes others, but the one who controls himself in anger.", "لَيْسَ الشَّدِيدُ بِالصُّرْعَةِ...", "Bukhari"),
    ("Modesty brings nothing but good.", "الْحَيَاءُ لَا يَأْتِي إِلَّا بِخَيْرٍ", "Bukhari"),
    ("Part of the excellence of a person's Islam is leaving what does not concern him.", "مِنْ حُسْنِ إِسْلَامِ الْمَرْءِ...", "Tirmidhi"),
    ("The best among you are those who have the best manners and character.", "خِيَارُكُمْ أَحَاسِنُكُمْ أَخْلَاقًا", "Bukhari"),
    ("Make things easy and do not make them difficult.", "يَسِّرُوا وَلَا تُعَسِّرُوا", "Bukhari"),
    ("Cleanliness is half of faith.", "الطُّهُورُ شَطْرُ الْإِيمَانِ", "Muslim"),
    ("None of you truly believes until he loves for his brother what he loves for himself.", "لَا يُؤْمِنُ أَحَدُكُمْ حَتَّى يُحِبَّ لِأَخِيهِ مَا يُحِبُّ لِنَفْسِهِ", "Bukhari & Muslim"),
    ("He who does not thank people, does not thank Allah.", "مَنْ لَا يَشْكُرِ النَّاسَ لَا يَشْكُرِ اللَّهَ", "Tirmidhi"),
];

/// (name, arabic, transliteration, meaning, virtue)
const SALAWAT: &[(&str, &str, &str, &str, &str)] = &[
    (
        "Basic Salawat",
        "اللَّهُمَّ صَلِّ عَلَىٰ مُحَمَّد",
        "Allahumma salli ‘ala Muhammad",
        "O Allah, send blessings upon Muhammad.",
        "Short, simple, and beloved form of salawat.",
    ),
    (
        "Peace and Blessings",
        "صَلَّى اللهُ عَلَيْهِ وَسَلَّمَ",
        "Salla Allahu ‘alayhi wa sallam",
        "May Allah send peace and blessings upon him.",
        "Often said after the Prophet's name.",
    ),
    (
        "Salawat for Light",
        "اللَّهُمَّ صَلِّ عَلَىٰ سَيِّدِنَا مُحَمَّدٍ نُورِ الْقُلُوبِ",
        "Allahumma salli ‘ala Sayyidina Muhammad nooril qulub",
        "O Allah, send blessings upon our master Muhammad, the light of hearts.",
        "Invokes spiritual light and inner peace.",
    ),
    (
        "Salawat of Mercy",
        "اللَّهُمَّ صَلِّ عَلَىٰ مُحَمَّدٍ وَارْحَمْ أُمَّتَهُ",
        "Allahumma salli ‘ala Muhammad wa irham ummatah",
        "O Allah, send blessings upon Muhammad and have mercy on his Ummah.",
        "Combines salawat with a prayer for the community.",
    ),
    (
        "Salawat for Ease",
        "اللَّهُمَّ صَلِّ عَلَىٰ مُحَمَّدٍ وَفَرِّجْ هَمِّي",
        "Allahumma salli ‘ala Muhammad wa farij hammi",
        "O Allah, send blessings upon Muhammad and relieve my worry.",
        "Simple salawat combined with du’a for relief.",
    ),
    (
        "Every Breath Salawat",
        "صَلَاةً تُعَادِلُ أَنْفَاسَ الْخَلَائِقِ",
        "Salatan tu‘adilu anfasa al-khala’iq",
        "Blessings equal to the breaths of all creation.",
        "Symbolic of limitless praise.",
    ),
    (
        "Salawat of Love",
        "اللَّهُمَّ صَلِّ عَلَىٰ حَبِيبِكَ مُحَمَّد",
        "Allahumma salli ‘ala Habibika Muhammad",
        "O Allah, send blessings upon Your beloved Muhammad.",
        "Soft and affectionate; shows love for the Prophet ﷺ.",
    ),
    (
        "Salawat with Peace",
        "اللَّهُمَّ صَلِّ وَسَلِّمْ عَلَىٰ مُحَمَّد",
        "Allahumma salli wa sallim ‘ala Muhammad",
        "O Allah, send peace and blessings upon Muhammad.",
        "Combines both salawat and salam together.",
    ),
    (
        "Salawat of Contentment",
        "اللَّهُمَّ صَلِّ عَلَىٰ مُحَمَّدٍ حَتَّىٰ أَرْضَىٰ",
        "Allahumma salli ‘ala Muhammad hatta arda",
        "O Allah, send blessings upon Muhammad until I am content.",
        "A personal, heartfelt salawat.",
    ),
    (
        "Salawat for Jannah",
        "اللَّهُمَّ صَلِّ عَلَىٰ مُحَمَّدٍ وَارْزُقْنَا صُحْبَتَهُ فِي الْجَنَّةِ",
        "Allahumma salli ‘ala Muhammad wa arzuqna suhbahu fil-jannah",
        "O Allah, send blessings upon Muhammad and grant us his companionship in Paradise.",
        "A salawat with longing and hope.",
    ),
    (
        "Salat al-Ibrahimiyyah",
        "اللَّهُمَّ صَلِّ عَلَىٰ مُحَمَّدٍ وَعَلَىٰ آلِ مُحَمَّدٍ كَمَا صَلَّيْتَ عَلَىٰ إِبْرَاهِيمَ وَعَلَىٰ آلِ إِبْرَاهِيمَ إِنَّكَ حَمِيدٌ مَجِيدٌ، اللَّهُمَّ بَارِكْ عَلَىٰ مُحَمَّدٍ وَعَلَىٰ آلِ مُحَمَّدٍ كَمَا بَارَكْتَ عَلَىٰ إِبْرَاهِيمَ وَعَلَىٰ آلِ إِبْرَاهِيمَ إِنَّكَ حَمِيدٌ مَجِيدٌ",
        "Allahumma salli ‘ala Muhammadin wa ‘ala aali Muhammadin kama sallayta ‘ala Ibrahima wa ‘ala aali Ibrahima innaka Hamidun Majid. Allahumma barik ‘ala Muhammadin wa ‘ala aali Muhammadin kama barakta ‘ala Ibrahima wa ‘ala aali Ibrahima innaka Hamidun Majid.",
        "O Allah, send Your prayers upon Muhammad and the family of Muhammad...",
        "Recited in every salah; best form of salawat.",
    ),
    (
        "Salawat An-Nur (The Light)",
        "اللَّهُمَّ صَلِّ عَلَىٰ سَيِّدِنَا مُحَمَّدٍ نُورِ الْأَنْوَارِ، وَسِرِّ الْأَسْرَارِ...",
        "Allahumma salli ‘ala Sayyidina Muhammadin nooril anwar...",
        "O Allah, send blessings upon our master Muhammad, the light of all lights...",
        "A salawat of deep spiritual reflection, often recited in gatherings of dhikr.",
    ),
    (
        "Salawat al-Fatih (The Opener)",
        "اللَّهُمَّ صَلِّ عَلَىٰ سَيِّدِنَا مُحَمَّدٍ الْفَاتِحِ لِمَا أُغْلِقَ...",
        "Allahumma salli ‘ala Sayyidina Muhammadin al-fatihi lima ughliqa...",
        "O Allah, send blessings upon our master Muhammad, the Opener of what was closed...",
        "Highly esteemed by scholars; considered powerful for unlocking spiritual openings.",
    ),
    (
        "Salawat Tunjina (The Relief Prayer)",
        "اللَّهُمَّ صَلِّ عَلَىٰ سَيِّدِنَا مُحَمَّدٍ صَلَاةً تُنْجِينَا بِهَا...",
        "Allahumma salli ‘ala Sayyidina Muhammadin salatan tunjina biha...",
        "O Allah, send blessings upon our master Muhammad...",
        "Recited for protection, relief from hardship, and spiritual elevation.",
    ),
    (
        "Salawat al-Mashishiyya",
        "اللَّهُمَّ صَلِّ عَلَىٰ مَنْ مِنْهُ انْشَقَّتِ الْأَسْرَارُ...",
        "Allahumma salli ‘ala man minhu inshakkat al-asrar...",
        "O Allah, send prayers upon the one from whom secrets unfolded...",
        "Mystical and poetic salawat, widely recited in Sufi traditions.",
    ),
];

/// (name, title, story, virtue)
const SAHABIYAT: &[(&str, &str, &str, &str)] = &[
    (
        "Khadijah bint Khuwaylid",
        "The First Believer",
        "When the Prophet ﷺ came home after the first revelation, shaking with fear and confusion, Khadijah (RA) did not question him. Instead, she wrapped him in a cloak and affirmed his character, saying, 'By Allah, He will never disgrace you.' She took him to her cousin Waraqah ibn Nawfal to seek clarity.",
        "Loyalty and Support",
    ),
    (
        "Fatimah bint Muhammad",
        "The Prophet’s Heart",
        "Fatimah (RA), the youngest daughter of the Prophet ﷺ, grew up witnessing hardship. She saw her father insulted and attacked, and as a child, would wipe the dirt from his back and soothe him.",
        "Compassion and Strength",
    ),
    (
        "Nusaybah bint Ka’ab",
        "The Warrior of Uhud",
        "Nusaybah (RA) was originally at the Battle of Uhud to provide water and care for the injured. But when the tide turned against the Muslims and the Prophet ﷺ was under threat, she grabbed a sword and shield and fought fiercely to defend him.",
        "Courage in Action",
    ),
    (
        "Asma bint Abu Bakr",
        "The Woman of Two Belts",
        "During the Prophet’s secret migration to Medina, Asma (RA), daughter of Abu Bakr (RA), risked her life to bring them food while they hid in the cave of Thawr. She tore her waistband in half to secure the provisions, earning the nickname 'Dhat al-Nitaqayn' (the woman of two belts).",
        "Fearless Sacrifice",
    ),
    (
        "Sumayyah bint Khayyat",
        "The First Martyr",
        "Sumayyah (RA), a formerly enslaved woman, was among the very first to accept Islam. She was tortured in the blazing sun by her master for her faith.",
        "Unbreakable Faith",
    ),
    (
        "Umm Salamah",
        "The Voice of Wisdom",
        "Umm Salamah (RA) faced great hardship when she emigrated to Medina. Her family was torn apart, but she remained patient and faithful.",
        "Wisdom and Diplomacy",
    ),
    (
        "Hafsah bint Umar",
        "The Guardian of the Qur’an",
        "Hafsah (RA), daughter of Umar ibn al-Khattab (RA), was known for her intellect and piety. After the Prophet’s death, the written collection of the Qur’an was entrusted to her for safekeeping.",
        "Trust and Intelligence",
    ),
    (
        "Umm Ammarah (Nusaybah)",
        "The Fierce Defender",
        "Also known as Umm Ammarah, Nusaybah participated in several battles, not just Uhud. At Hunayn and Yamamah, she was wounded again while holding the Islamic banner high.",
        "Unshakable Valor",
    ),
    (
        "Rufaida Al-Aslamiyyah",
        "The First Nurse",
        "Rufaida (RA) trained other women in basic medical care and was known for her compassion and organization. During battles, she set up field clinics and treated the wounded.",
        "Healing and Leadership",
    ),
    (
        "Umm Sulaym",
        "The Faithful Educator",
        "Umm Sulaym (RA) accepted Islam early, even though her husband refused. After he died, she raised her son Anas ibn Malik with Islamic values.",
        "Devotion and Nurturing",
    ),
    (
        "Zaynab bint Jahsh",
        "The Humble Devotee",
        "Zaynab (RA), a cousin of the Prophet ﷺ and one of his wives, was known for her humility, worship, and charity. She would sew by hand and give away everything she had to the poor.",
        "Charity and Simplicity",
    ),
    (
        "Safiyyah bint Abdul-Muttalib",
        "The Lioness of Islam",
        "Safiyyah (RA), the Prophet’s aunt, was known for her bravery. During the Battle of the Trench, when an enemy spy tried to sneak into the fortress where Muslim women and children were hiding, Safiyyah herself struck him down.",
        "Boldness and Initiative",
    ),
    (
        "Umm Waraqah",
        "The Qur'an Preserver",
        "Umm Waraqah (RA) was so knowledgeable of the Qur’an that the Prophet ﷺ referred to her as 'the martyr' even before her death. He allowed her to lead prayers for her household.",
        "Piety and Scholarship",
    ),
    (
        "Atikah bint Zayd",
        "The Eloquent Believer",
        "Atikah (RA) was married to multiple key companions including Umar ibn al-Khattab and Abdullah ibn Abu Bakr. She was known for her poetry, intellect, and courage.",
        "Expression and Loyalty",
    ),
    (
        "Lubabah bint Al-Harith (Umm Fadl)",
        "The First Woman After Khadijah",
        "Lubabah (RA), wife of Abbas ibn Abdul-Muttalib, accepted Islam right after Khadijah. She was deeply connected to the Prophet ﷺ and even helped in nurturing his grandchildren.",
        "Devotion and Defense",
    ),
];

fn remembrances(rows: &[(&str, &str, &str)]) -> Vec<Remembrance> {
    rows.iter()
        .map(|(text, arabic, theme)| Remembrance {
            text: text.to_string(),
            arabic: arabic.to_string(),
            theme: theme.to_string(),
        })
        .collect()
}

fn quotes(rows: &[(&str, &str, &str)]) -> Vec<Quote> {
    rows.iter()
        .map(|(text, arabic, reference)| Quote {
            text: text.to_string(),
            arabic: arabic.to_string(),
            reference: reference.to_string(),
        })
        .collect()
}

pub fn dhikr() -> Vec<Remembrance> {
    remembrances(DHIKR)
}

pub fn duas() -> Vec<Remembrance> {
    remembrances(DUAS)
}

pub fn quran_verses() -> Vec<Quote> {
    quotes(QURAN_VERSES)
}

pub fn hadith() -> Vec<Quote> {
    quotes(HADITH)
}

/// Short salawat first, then the long ones
pub fn salawat() -> Vec<Salawat> {
    SALAWAT
        .iter()
        .map(|(name, arabic, transliteration, meaning, virtue)| Salawat {
            name: name.to_string(),
            arabic: arabic.to_string(),
            transliteration: transliteration.to_string(),
            meaning: meaning.to_string(),
            virtue: virtue.to_string(),
        })
        .collect()
}

pub fn sahabiyat() -> Vec<CompanionStory> {
    SAHABIYAT
        .iter()
        .map(|(name, title, story, virtue)| CompanionStory {
            name: name.to_string(),
            title: title.to_string(),
            story: story.to_string(),
            virtue: virtue.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_sizes() {
        assert_eq!(dhikr().len(), 17);
        assert_eq!(duas().len(), 15);
        assert_eq!(quran_verses().len(), 15);
        assert_eq!(hadith().len(), 15);
        assert_eq!(salawat().len(), 15);
        assert_eq!(sahabiyat().len(), 15);
    }

    #[test]
    fn test_salawat_order_starts_with_basic() {
        let all = salawat();
        assert_eq!(all[0].name, "Basic Salawat");
        assert_eq!(all[10].name, "Salat al-Ibrahimiyyah");
    }
}
