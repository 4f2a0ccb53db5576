/// Resource center catalog

use crate::catalog::{Resource, ResourceCategory};

/// (title, description, link, category)
const RESOURCES: &[(&str, &str, &str, ResourceCategory)] = &[
    (
        "Cramps Relief Tips",
        "Effective techniques to relieve menstrual cramps.",
        "https://www.healthline.com/health/womens-health/menstrual-cramp-relief",
        ResourceCategory::Physical,
    ),
    (
        "Healthy Period Diet",
        "How to eat well during your period for energy & wellness.",
        "https://www.medicalnewstoday.com/articles/period-diet",
        ResourceCategory::Physical,
    ),
    (
        "Yoga for Menstruation",
        "Yoga poses to ease pain and promote balance.",
        "https://www.yogajournal.com/poses/yoga-for-menstruation/",
        ResourceCategory::Physical,
    ),
    (
        "Sleep Tips for Your Cycle",
        "Improve your rest during menstruation with sleep advice.",
        "https://www.sleepfoundation.org/menstruation-and-sleep",
        ResourceCategory::Physical,
    ),
    (
        "Hygiene Tips for Your Period",
        "Best practices for staying clean, fresh, and confident on your cycle.",
        "https://www.healthline.com/health/menstrual-hygiene-tips",
        ResourceCategory::Physical,
    ),
    (
        "Period-Friendly Workouts",
        "Gentle exercise routines that support your body during menstruation.",
        "https://www.self.com/story/best-workouts-for-every-phase-of-your-menstrual-cycle",
        ResourceCategory::Physical,
    ),
    (
        "Product Comparison: Pads, Cups, Tampons",
        "Pros and cons of common menstrual products.",
        "https://www.medicalnewstoday.com/articles/menstrual-cup-vs-tampon",
        ResourceCategory::Physical,
    ),
    (
        "Herbal Teas for Cramp Relief",
        "Natural teas that can help reduce bloating and cramps.",
        "https://www.healthline.com/nutrition/tea-for-cramps",
        ResourceCategory::Physical,
    ),
    (
        "Understanding PMS",
        "Causes, symptoms, and coping tips for PMS.",
        "https://www.plannedparenthood.org/learn/health-and-wellness/premenstrual-syndrome",
        ResourceCategory::Mental,
    ),
    (
        "Mental Health During Periods",
        "Managing anxiety, sadness, and emotional changes.",
        "https://www.mind.org.uk/information-support/types-of-mental-health-problems/premenstrual-dysphoric-disorder-pmdd/",
        ResourceCategory::Mental,
    ),
    (
        "Managing Stress With Mindfulness",
        "Gentle meditations and practices to calm your nervous system.",
        "https://www.headspace.com/meditation/stress",
        ResourceCategory::Mental,
    ),
    (
        "Cycle Syncing & Mental Focus",
        "Plan your productivity and creativity around hormonal phases.",
        "https://www.cyclingwithmyflow.com/productivity-hormones/",
        ResourceCategory::Mental,
    ),
    (
        "Mood Swings Explained",
        "Why moods shift & how to cope with kindness.",
        "https://www.medicalnewstoday.com/articles/pms-mood-swings",
        ResourceCategory::Mental,
    ),
    (
        "Journaling Through Hormonal Changes",
        "Use reflective writing to manage emotions during your period.",
        "https://www.psychologytoday.com/us/blog/the-empowerment-diary/202001/journaling-through-your-cycle",
        ResourceCategory::Mental,
    ),
    (
        "Islam & Menstruation",
        "Faith-based insights and rulings about menstruation in Islam.",
        "https://yaqeeninstitute.org/read/paper/understanding-menstruation-in-islam",
        ResourceCategory::Spiritual,
    ),
    (
        "Islamic Self-Care Practices",
        "Holistic spiritual care from an Islamic perspective.",
        "https://www.productivemuslim.com/self-care-in-islam/",
        ResourceCategory::Spiritual,
    ),
    (
        "Gratitude & Journaling Prompts",
        "Faith-based journaling prompts to boost mindfulness.",
        "https://muslimjournal.com/gratitude-journaling",
        ResourceCategory::Spiritual,
    ),
    (
        "Can I Pray During My Period?",
        "Understanding rulings & mindset when unable to pray.",
        "https://seekersguidance.org/answers/general-counsel/can-a-woman-pray-or-recite-the-quran-during-her-period/",
        ResourceCategory::Spiritual,
    ),
    (
        "Spiritual Reflection Without Salah",
        "Ways to stay spiritually connected when you can’t perform prayer.",
        "https://quranacademy.io/blog/ways-to-stay-connected-to-allah-during-menstruation/",
        ResourceCategory::Spiritual,
    ),
    (
        "Daily Dhikr & Affirmations",
        "Simple dhikr and positive statements to maintain inner peace.",
        "https://quranicquotes.com/dhikr-phrases-from-quran/",
        ResourceCategory::Spiritual,
    ),
];

pub fn resources() -> Vec<Resource> {
    RESOURCES
        .iter()
        .map(|(title, description, link, category)| Resource {
            title: title.to_string(),
            description: description.to_string(),
            link: link.to_string(),
            category: *category,
        })
        .collect()
}

/// Resources in one category, or all of them when `category` is `None`
pub fn in_category(items: &[Resource], category: Option<ResourceCategory>) -> Vec<Resource> {
    items
        .iter()
        .filter(|r| category.map_or(true, |c| r.category == c))
        .cloned()
        .collect()
}
