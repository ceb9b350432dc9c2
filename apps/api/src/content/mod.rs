// Profile content: loads `profile.json`, validates it, caches the parsed result
// and reports TODO placeholders left in the copy.

pub mod handlers;
pub mod store;
pub mod todos;
pub mod validation;

use std::path::PathBuf;

use thiserror::Error;

pub use store::ProfileStore;

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("Cannot read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed profile JSON: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("Invalid profile: {0}")]
    Invalid(String),
}

#[cfg(test)]
pub(crate) mod fixtures {
    use serde_json::{json, Value};

    pub fn sample_profile() -> Value {
        json!({
            "name": "Rosa M. Hale",
            "title": "Product Operations Lead",
            "hero": {
                "headline": "Turning messy operations into calm systems",
                "subhead": "Ten years of shipping process that sticks",
                "microProof": "Trusted by three scale-ups",
                "metrics": [{ "label": "Teams onboarded", "value": "40+" }],
                "ctas": {
                    "primary": { "text": "See work", "href": "#work" },
                    "secondary": { "text": "Get in touch", "href": "#contact" }
                }
            },
            "pillars": [{ "title": "Clarity", "statement": "TODO: write pillar statement" }],
            "summary": ["Operations lead focused on measurable outcomes."],
            "contact": {
                "phone": "+1 555 0100",
                "email": "rosa@example.com",
                "linkedin": "https://www.linkedin.com/in/rosa"
            },
            "skills": {
                "methodologies": ["Lean"],
                "techniques": ["Process mapping"],
                "tools": ["Jira"]
            },
            "experience": [{
                "company": "Northwind",
                "location": "Remote",
                "roles": [{
                    "title": "Ops Lead",
                    "start": "2021",
                    "end": "Present",
                    "bullets": ["Cut onboarding time by 40%", "TODO: add metric"]
                }]
            }],
            "education": [{ "degree": "BSc Economics", "institution": "State University", "start": "2010" }],
            "certifications": [{ "title": "PMP", "issuer": "PMI", "date": "2019" }],
            "projects": [{ "title": "Playbook", "description": "Internal ops playbook", "tags": ["ops"] }],
            "volunteering": [{ "organization": "Food Bank", "role": "Coordinator", "start": "2018", "end": "2020" }],
            "draftNotes": "ignored by the schema"
        })
    }
}
