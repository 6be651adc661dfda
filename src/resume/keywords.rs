use crate::domain::common::same_key;

/// Skills employers list for each career category, most important first.
const CATEGORY_KEYWORDS: &[(&str, &[&str])] = &[
    (
        "Software Engineer",
        &[
            "Python", "Java", "JavaScript", "SQL", "Git", "Docker", "AWS", "REST",
            "Testing", "Agile",
        ],
    ),
    (
        "Data Scientist",
        &[
            "Python", "SQL", "Machine Learning", "Statistics", "Pandas", "TensorFlow",
            "Tableau", "Spark", "A/B Testing", "Data Visualization",
        ],
    ),
    (
        "Product Manager",
        &[
            "Roadmap", "Stakeholder", "Agile", "Scrum", "User Research", "Analytics",
            "SQL", "Jira", "Prioritization", "Communication",
        ],
    ),
    (
        "Cybersecurity Analyst",
        &[
            "SIEM", "Firewall", "Incident Response", "Linux", "Networking", "Python",
            "Vulnerability", "Penetration Testing", "Compliance", "Security+",
        ],
    ),
    (
        "UX Designer",
        &[
            "Figma", "Wireframe", "Prototype", "User Research", "Usability Testing",
            "Adobe", "Design System", "Accessibility", "HTML", "CSS",
        ],
    ),
];

const GENERIC_KEYWORDS: &[&str] = &[
    "Communication",
    "Teamwork",
    "Problem Solving",
    "Leadership",
    "Excel",
];

/// Ordered keyword list for a category; unknown categories get a generic list.
pub fn keywords_for(category: &str) -> &'static [&'static str] {
    CATEGORY_KEYWORDS
        .iter()
        .find(|(name, _)| same_key(name, category))
        .map(|(_, keywords)| *keywords)
        .unwrap_or(GENERIC_KEYWORDS)
}

/// Categories with a dedicated keyword list.
pub fn known_categories() -> impl Iterator<Item = &'static str> {
    CATEGORY_KEYWORDS.iter().map(|(name, _)| *name)
}
