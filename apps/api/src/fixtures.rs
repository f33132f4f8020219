//! Seed data for the in-memory catalog and notification center.
//!
//! Every function returns freshly built values. Callers own what they get, so
//! tests and the running service never share mutable fixture state.

use chrono::{DateTime, NaiveDate, Utc};

use crate::models::applicant::{ApplicantProfile, Education, Experience};
use crate::models::job::{
    Company, ExperienceRange, JobListing, JobStatus, JobType, RemotePolicy, SalaryRange,
};
use crate::models::notification::{Notification, NotificationCategory, NotificationKind};

fn utc(y: i32, m: u32, d: u32, h: u32, min: u32) -> DateTime<Utc> {
    NaiveDate::from_ymd_opt(y, m, d)
        .and_then(|date| date.and_hms_opt(h, min, 0))
        .map(|naive| naive.and_utc())
        .unwrap_or_default()
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn usd(min: u32, max: u32) -> SalaryRange {
    SalaryRange {
        min,
        max,
        currency: "USD".to_string(),
    }
}

pub fn sample_companies() -> Vec<Company> {
    vec![
        Company {
            id: "comp-1".to_string(),
            name: "TechCorp Solutions".to_string(),
            description: "Leading technology company specializing in AI and machine learning solutions.".to_string(),
            industry: "Technology".to_string(),
            size: "500-1000".to_string(),
            location: "San Francisco, CA".to_string(),
            website: Some("https://techcorp.com".to_string()),
            culture: strings(&["Innovation", "Work-life balance", "Remote-friendly", "Learning & Development"]),
            benefits: strings(&["Health Insurance", "401k Matching", "Flexible PTO", "Stock Options", "Remote Work"]),
        },
        Company {
            id: "comp-2".to_string(),
            name: "DataFlow Inc".to_string(),
            description: "Data analytics and business intelligence platform helping companies make data-driven decisions.".to_string(),
            industry: "Data & Analytics".to_string(),
            size: "100-500".to_string(),
            location: "Austin, TX".to_string(),
            website: Some("https://dataflow.com".to_string()),
            culture: strings(&["Data-driven", "Collaborative", "Fast-paced", "Growth mindset"]),
            benefits: strings(&["Health Insurance", "Dental & Vision", "Unlimited PTO", "Professional Development", "Gym Membership"]),
        },
        Company {
            id: "comp-3".to_string(),
            name: "GreenTech Innovations".to_string(),
            description: "Sustainable technology solutions for a better tomorrow.".to_string(),
            industry: "Clean Energy".to_string(),
            size: "50-100".to_string(),
            location: "Seattle, WA".to_string(),
            website: Some("https://greentech.com".to_string()),
            culture: strings(&["Sustainability", "Innovation", "Social impact", "Transparency"]),
            benefits: strings(&["Health Insurance", "Green commuting allowance", "Flexible hours", "Equity participation"]),
        },
    ]
}

pub fn sample_jobs() -> Vec<JobListing> {
    let companies = sample_companies();
    let techcorp = &companies[0];
    let dataflow = &companies[1];
    let greentech = &companies[2];

    vec![
        JobListing {
            id: "job-1".to_string(),
            title: "Senior Frontend Developer".to_string(),
            company: techcorp.clone(),
            description: "We are seeking a highly skilled Senior Frontend Developer to join our dynamic team. You will be responsible for creating outstanding user experiences using modern web technologies.".to_string(),
            requirements: strings(&[
                "5+ years of experience in frontend development",
                "Expert knowledge of React, TypeScript, and modern CSS",
                "Experience with state management (Redux, Zustand)",
                "Strong understanding of responsive design",
                "Experience with testing frameworks (Jest, Cypress)",
                "Knowledge of performance optimization techniques",
            ]),
            responsibilities: strings(&[
                "Develop and maintain high-quality web applications",
                "Collaborate with design and backend teams",
                "Implement responsive and accessible user interfaces",
                "Optimize applications for maximum speed and scalability",
                "Mentor junior developers and contribute to code reviews",
            ]),
            skills: strings(&["React", "TypeScript", "JavaScript", "CSS", "HTML", "Redux", "Jest", "Webpack"]),
            experience: ExperienceRange { min: 5, max: 8 },
            salary: usd(120_000, 160_000),
            location: "San Francisco, CA".to_string(),
            job_type: JobType::FullTime,
            remote: RemotePolicy::Hybrid,
            benefits: strings(&["Health Insurance", "Stock Options", "Flexible PTO", "401k Matching"]),
            posted_at: utc(2024, 1, 15, 10, 0),
            deadline: Some(utc(2024, 2, 15, 23, 59)),
            status: JobStatus::Active,
            applicant_count: 24,
            view_count: 156,
        },
        JobListing {
            id: "job-2".to_string(),
            title: "Data Scientist".to_string(),
            company: dataflow.clone(),
            description: "Join our data science team to build machine learning models and derive insights from large datasets to drive business decisions.".to_string(),
            requirements: strings(&[
                "Masters or PhD in Data Science, Statistics, or related field",
                "3+ years of experience in data science/machine learning",
                "Proficiency in Python and SQL",
                "Experience with ML frameworks (scikit-learn, TensorFlow, PyTorch)",
                "Strong statistical analysis skills",
                "Experience with data visualization tools",
            ]),
            responsibilities: strings(&[
                "Develop and deploy machine learning models",
                "Analyze large datasets to identify trends and patterns",
                "Create data visualizations and reports",
                "Collaborate with engineering teams on model deployment",
                "Present findings to stakeholders",
            ]),
            skills: strings(&["Python", "SQL", "Machine Learning", "Statistics", "TensorFlow", "Pandas", "Jupyter", "Tableau"]),
            experience: ExperienceRange { min: 3, max: 6 },
            salary: usd(110_000, 150_000),
            location: "Austin, TX".to_string(),
            job_type: JobType::FullTime,
            remote: RemotePolicy::Remote,
            benefits: strings(&["Health Insurance", "Unlimited PTO", "Professional Development", "Remote Work Setup"]),
            posted_at: utc(2024, 1, 20, 9, 30),
            deadline: Some(utc(2024, 2, 20, 23, 59)),
            status: JobStatus::Active,
            applicant_count: 18,
            view_count: 89,
        },
        JobListing {
            id: "job-3".to_string(),
            title: "DevOps Engineer".to_string(),
            company: techcorp.clone(),
            description: "We are looking for a DevOps Engineer to help us scale our infrastructure and improve our deployment processes.".to_string(),
            requirements: strings(&[
                "4+ years of DevOps/Infrastructure experience",
                "Strong knowledge of AWS/Azure/GCP",
                "Experience with containerization (Docker, Kubernetes)",
                "Proficiency in Infrastructure as Code (Terraform, CloudFormation)",
                "Experience with CI/CD pipelines",
                "Strong scripting skills (Python, Bash)",
            ]),
            responsibilities: strings(&[
                "Design and maintain cloud infrastructure",
                "Implement and improve CI/CD pipelines",
                "Monitor system performance and reliability",
                "Automate deployment and scaling processes",
                "Ensure security best practices",
            ]),
            skills: strings(&["AWS", "Docker", "Kubernetes", "Terraform", "Python", "Linux", "Git", "Jenkins"]),
            experience: ExperienceRange { min: 4, max: 7 },
            salary: usd(130_000, 170_000),
            location: "San Francisco, CA".to_string(),
            job_type: JobType::FullTime,
            remote: RemotePolicy::Hybrid,
            benefits: strings(&["Health Insurance", "Stock Options", "Flexible PTO", "Professional Development"]),
            posted_at: utc(2024, 1, 18, 14, 20),
            deadline: None,
            status: JobStatus::Active,
            applicant_count: 31,
            view_count: 203,
        },
        JobListing {
            id: "job-4".to_string(),
            title: "UX Designer".to_string(),
            company: greentech.clone(),
            description: "Join our design team to create intuitive and beautiful user experiences for our sustainable technology products.".to_string(),
            requirements: strings(&[
                "3+ years of UX/UI design experience",
                "Proficiency in design tools (Figma, Sketch, Adobe Creative Suite)",
                "Strong portfolio demonstrating user-centered design",
                "Experience with user research and usability testing",
                "Knowledge of design systems and component libraries",
            ]),
            responsibilities: strings(&[
                "Design user interfaces for web and mobile applications",
                "Conduct user research and usability testing",
                "Create wireframes, prototypes, and high-fidelity designs",
                "Collaborate with developers and product managers",
                "Maintain and evolve design systems",
            ]),
            skills: strings(&["Figma", "Sketch", "Adobe Creative Suite", "Prototyping", "User Research", "Design Systems"]),
            experience: ExperienceRange { min: 3, max: 5 },
            salary: usd(95_000, 125_000),
            location: "Seattle, WA".to_string(),
            job_type: JobType::FullTime,
            remote: RemotePolicy::Hybrid,
            benefits: strings(&["Health Insurance", "Flexible hours", "Professional Development", "Design tool subscriptions"]),
            posted_at: utc(2024, 1, 22, 11, 15),
            deadline: None,
            status: JobStatus::Active,
            applicant_count: 15,
            view_count: 67,
        },
        JobListing {
            id: "job-5".to_string(),
            title: "Product Manager".to_string(),
            company: dataflow.clone(),
            description: "Lead product strategy and development for our data analytics platform.".to_string(),
            requirements: strings(&[
                "5+ years of product management experience",
                "Experience with data products or B2B SaaS",
                "Strong analytical and strategic thinking skills",
                "Experience with agile development methodologies",
                "Excellent communication and leadership skills",
            ]),
            responsibilities: strings(&[
                "Define product vision and strategy",
                "Manage product roadmap and prioritization",
                "Work closely with engineering and design teams",
                "Analyze market trends and customer feedback",
                "Define and track key product metrics",
            ]),
            skills: strings(&["Product Strategy", "Agile", "Data Analysis", "Market Research", "Leadership", "Communication"]),
            experience: ExperienceRange { min: 5, max: 8 },
            salary: usd(140_000, 180_000),
            location: "Austin, TX".to_string(),
            job_type: JobType::FullTime,
            remote: RemotePolicy::Remote,
            benefits: strings(&["Health Insurance", "Stock Options", "Unlimited PTO", "Leadership Development"]),
            posted_at: utc(2024, 1, 25, 16, 45),
            deadline: None,
            status: JobStatus::Active,
            applicant_count: 22,
            view_count: 134,
        },
    ]
}

pub fn sample_applicant() -> ApplicantProfile {
    ApplicantProfile {
        id: "user-1".to_string(),
        name: "John Doe".to_string(),
        title: "Senior Frontend Developer".to_string(),
        summary: "Passionate frontend developer with 6 years of experience building scalable web applications using React, TypeScript, and modern web technologies. Strong focus on user experience and performance optimization.".to_string(),
        skills: strings(&["React", "TypeScript", "JavaScript", "CSS", "HTML", "Redux", "Jest", "Git", "Webpack", "Node.js"]),
        experience: vec![
            Experience {
                id: "exp-1".to_string(),
                company: "Tech Startup Inc".to_string(),
                position: "Senior Frontend Developer".to_string(),
                start_date: "2022-01".to_string(),
                end_date: Some("2024-01".to_string()),
                current: false,
                description: "Led frontend development for a fintech application, resulting in 40% improvement in user engagement. Mentored junior developers and established frontend best practices.".to_string(),
                skills: strings(&["React", "TypeScript", "Redux", "CSS-in-JS"]),
            },
            Experience {
                id: "exp-2".to_string(),
                company: "Digital Agency Co".to_string(),
                position: "Frontend Developer".to_string(),
                start_date: "2020-03".to_string(),
                end_date: Some("2022-01".to_string()),
                current: false,
                description: "Developed responsive websites for various clients using React and modern CSS. Collaborated with designers to implement pixel-perfect interfaces.".to_string(),
                skills: strings(&["React", "JavaScript", "SASS", "Webpack"]),
            },
        ],
        education: vec![Education {
            id: "edu-1".to_string(),
            institution: "University of California, Berkeley".to_string(),
            degree: "Bachelor of Science".to_string(),
            field: "Computer Science".to_string(),
            start_date: "2016-09".to_string(),
            end_date: Some("2020-05".to_string()),
            gpa: Some(3.7),
        }],
        certifications: strings(&["AWS Certified Developer Associate", "Google Analytics Certified"]),
    }
}

pub fn sample_notifications() -> Vec<Notification> {
    vec![
        Notification {
            id: "notif-1".to_string(),
            title: "Interview Scheduled".to_string(),
            message: "Your interview for Senior Frontend Developer at TechCorp Solutions has been scheduled for January 30th at 2:00 PM.".to_string(),
            kind: NotificationKind::Info,
            read: false,
            created_at: utc(2024, 1, 25, 11, 30),
            action_url: Some("/applicant/applications/app-1".to_string()),
            action_label: None,
            user_id: Some("user-1".to_string()),
            category: Some(NotificationCategory::Interview),
        },
        Notification {
            id: "notif-2".to_string(),
            title: "New Job Match".to_string(),
            message: "We found a new job that matches your profile: DevOps Engineer at TechCorp Solutions (88% match)".to_string(),
            kind: NotificationKind::Info,
            read: false,
            created_at: utc(2024, 1, 24, 16, 20),
            action_url: Some("/applicant/jobs/job-3".to_string()),
            action_label: None,
            user_id: Some("user-1".to_string()),
            category: Some(NotificationCategory::Job),
        },
        Notification {
            id: "notif-3".to_string(),
            title: "Application Update".to_string(),
            message: "Your application for Senior Frontend Developer has been reviewed.".to_string(),
            kind: NotificationKind::Info,
            read: true,
            created_at: utc(2024, 1, 20, 9, 15),
            action_url: Some("/applicant/applications/app-1".to_string()),
            action_label: None,
            user_id: Some("user-1".to_string()),
            category: Some(NotificationCategory::Application),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factories_return_independent_values() {
        let mut first = sample_jobs();
        first[0].skills.clear();
        let second = sample_jobs();
        assert_eq!(second[0].skills.len(), 8);
    }

    #[test]
    fn test_job_ids_are_unique() {
        let jobs = sample_jobs();
        let mut ids: Vec<_> = jobs.iter().map(|j| j.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), jobs.len());
    }

    #[test]
    fn test_timestamps_are_parsed() {
        let jobs = sample_jobs();
        assert_eq!(jobs[0].posted_at.to_rfc3339(), "2024-01-15T10:00:00+00:00");
    }

    #[test]
    fn test_sample_notifications_unread_count() {
        let unread = sample_notifications().iter().filter(|n| !n.read).count();
        assert_eq!(unread, 2);
    }
}
