//! The built-in portfolio shipped with the binary.

use std::sync::LazyLock;

use super::{Education, PortfolioSnapshot, Project, SkillGroup, Socials};

static BUILTIN: LazyLock<PortfolioSnapshot> = LazyLock::new(|| PortfolioSnapshot {
    name: "Trishit Majumdar".to_string(),
    role: "Android Developer & Web Explorer".to_string(),
    about: "I am Trishit Majumdar, an Android Developer passionate about Kotlin Multiplatform \
            and Modern Web Development. I bridge the gap between mobile and web using \
            technologies like Jetpack Compose, Kobweb, and React. Currently pursuing B.Tech \
            in CS while building scalable apps."
        .to_string(),
    location: "West Bengal, India".to_string(),
    socials: Socials {
        github: "github.com/Quantum3600".to_string(),
        linkedin: "linkedin.com/in/trishitmajumdar".to_string(),
        twitter: Some("twitter.com/trishit_m".to_string()),
        email: Some("trishitquantum360@gmail.com".to_string()),
        instagram: Some("instagram.com/trishit.dev".to_string()),
        facebook: Some("facebook.com/trishit.majumdar".to_string()),
    },
    projects: vec![
        project(
            "1",
            "KobGames Store",
            "A modern web game store interface built with Kobweb, showcasing the power of \
             Kotlin on the web.",
            &["Kobweb", "Kotlin", "Compose HTML"],
            "2024",
        ),
        project(
            "2",
            "WakeApp",
            "A smart alarm Android application designed to ensure you wake up on time with \
             intuitive UI patterns.",
            &["Android", "Kotlin", "Jetpack Compose"],
            "2023",
        ),
        project(
            "3",
            "Quotd",
            "A minimalistic quotes application delivering daily inspiration with a focus on \
             Material Design.",
            &["Android", "Kotlin", "MVVM"],
            "2023",
        ),
    ],
    skills: vec![
        skills("Android/KMP", &["Kotlin", "Jetpack Compose", "Kobweb", "Ktor Mobile"]),
        skills("Frontend", &["React", "TypeScript", "Tailwind", "HTML/CSS"]),
        skills(
            "Backend",
            &["Node.js", "Spring Boot", "Java", "Ktor Server", "MongoDB"],
        ),
        skills("Tools/AI", &["Git", "Docker", "Figma", "Gemini", "TensorFlow"]),
    ],
    education: vec![
        education(
            "e1",
            "B.Tech in Computer Science",
            "Hooghly Engineering & Technology College",
            "Present",
            "Pursuing Bachelor of Technology in Computer Science & Engineering.",
        ),
        education(
            "e2",
            "Higher Secondary",
            "Hooghly Collegiate School",
            "Completed",
            "Completed Higher Secondary education with focus on Science.",
        ),
        education(
            "e3",
            "Secondary Education",
            "St. John's School",
            "Completed",
            "Foundation laid at middle school level.",
        ),
    ],
});

/// Returns the built-in portfolio.
pub fn builtin() -> &'static PortfolioSnapshot {
    &BUILTIN
}

fn project(id: &str, title: &str, description: &str, tech: &[&str], year: &str) -> Project {
    Project {
        id: id.to_string(),
        title: title.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(ToString::to_string).collect(),
        link: None,
        year: Some(year.to_string()),
    }
}

fn skills(category: &str, items: &[&str]) -> SkillGroup {
    SkillGroup {
        category: category.to_string(),
        items: items.iter().map(ToString::to_string).collect(),
    }
}

fn education(
    id: &str,
    role: &str,
    institution: &str,
    period: &str,
    description: &str,
) -> Education {
    Education {
        id: id.to_string(),
        role: role.to_string(),
        institution: institution.to_string(),
        period: period.to_string(),
        description: description.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_is_shared() {
        assert!(std::ptr::eq(builtin(), builtin()));
    }

    #[test]
    fn test_builtin_contents() {
        let snapshot = builtin();
        assert_eq!(snapshot.name, "Trishit Majumdar");
        assert_eq!(snapshot.projects.len(), 3);
        assert_eq!(snapshot.skills.len(), 4);
        assert_eq!(snapshot.education.len(), 3);
        assert_eq!(snapshot.socials.github, "github.com/Quantum3600");
    }
}
