//! Fixed sample data the console starts from. Nothing is persisted; the
//! collections live and die with the process.

use shared::domain::{Organization, OrganizationId, Volunteer, VolunteerId};

pub fn sample_organizations() -> Vec<Organization> {
    vec![
        Organization {
            id: OrganizationId(1),
            name: "Helping Hands".to_string(),
            description: "A charity focused on education.".to_string(),
        },
        Organization {
            id: OrganizationId(2),
            name: "Community Builders".to_string(),
            description: "Focused on building homes.".to_string(),
        },
        Organization {
            id: OrganizationId(3),
            name: "Food For All".to_string(),
            description: "Providing food to underserved communities.".to_string(),
        },
    ]
}

pub fn sample_volunteers() -> Vec<Volunteer> {
    vec![
        Volunteer {
            id: VolunteerId(1),
            name: "John Doe".to_string(),
            skills: vec!["Cooking".to_string(), "Teaching".to_string()],
        },
        Volunteer {
            id: VolunteerId(2),
            name: "Jane Smith".to_string(),
            skills: vec!["Cleaning".to_string(), "Carpentry".to_string()],
        },
        Volunteer {
            id: VolunteerId(3),
            name: "Michael Johnson".to_string(),
            skills: vec!["Painting".to_string(), "Teaching".to_string()],
        },
    ]
}
