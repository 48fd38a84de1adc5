use super::types::{Education, Experience, Project, ResumeDocument};

/// A filled-in example resume for trying the tool out.
///
/// It deliberately leaves room for improvement: the summary is short, there
/// is only one project and six skills, so it scores 65 with default rules.
pub fn sample_document() -> ResumeDocument {
    ResumeDocument {
        full_name: "Alex Morgan".to_string(),
        email: "alex.morgan@example.com".to_string(),
        phone: "+1 (555) 123-4567".to_string(),
        location: "San Francisco, CA".to_string(),
        linkedin: "linkedin.com/in/alexmorgan".to_string(),
        github: "github.com/alexmorgan".to_string(),
        summary: "Experienced Full Stack Developer with a passion for building scalable web \
                  applications. Proven track record in delivering high-quality code and \
                  leading agile teams."
            .to_string(),
        skills: "React, TypeScript, Node.js, PostgreSQL, AWS, Docker".to_string(),
        education: vec![Education {
            id: "1".to_string(),
            school: "University of California, Berkeley".to_string(),
            degree: "B.S. Computer Science".to_string(),
            year: "2020".to_string(),
        }],
        experience: vec![
            Experience {
                id: "1".to_string(),
                company: "Tech Solutions Inc.".to_string(),
                role: "Senior Developer".to_string(),
                duration: "2022 - Present".to_string(),
                description: "Led development of core platform features. Improved performance \
                              by 40%."
                    .to_string(),
            },
            Experience {
                id: "2".to_string(),
                company: "WebCorp".to_string(),
                role: "Frontend Developer".to_string(),
                duration: "2020 - 2022".to_string(),
                description: "Developed responsive UI components using React and Redux."
                    .to_string(),
            },
        ],
        projects: vec![Project {
            id: "1".to_string(),
            name: "E-commerce Platform".to_string(),
            description: "A full-featured online store with payment integration.".to_string(),
            link: "github.com/alexmorgan/shop".to_string(),
        }],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_is_not_empty() {
        let doc = sample_document();
        assert!(!doc.is_empty());
        assert_eq!(doc.experience.len(), 2);
        assert_eq!(doc.projects.len(), 1);
        assert_eq!(doc.skill_items().len(), 6);
    }

    #[test]
    fn test_sample_summary_is_short() {
        // Keeps the summary rule failing so the sample shows suggestions
        assert!(sample_document().summary_word_count() < 40);
    }
}
