//! Session content
//!
//! The text the portfolio commands print: banner art, about/skills/contact
//! blurbs, and the neofetch info table. All of it is configurable; the
//! defaults give a working demo session out of the box. Ordered `Vec`s are
//! used throughout so output enumeration is stable by construction.

use serde::{Deserialize, Serialize};

/// One named group of skills, printed as a titled bullet list
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SkillCategory {
    pub name: String,
    pub items: Vec<String>,
}

/// One labelled contact line
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContactEntry {
    pub label: String,
    pub value: String,
}

/// One `Key: value` row of the neofetch info table
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct InfoEntry {
    pub label: String,
    pub value: String,
}

/// Everything the content commands print
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Content {
    /// Banner ASCII art, one line per entry (colored by the banner handler)
    pub banner_art: Vec<String>,
    /// Welcome line under the banner art
    pub welcome: String,
    /// `about` command body
    pub about: String,
    /// `projects` command body
    pub projects: String,
    /// `resume` command body
    pub resume: String,
    /// `skills` command categories, in display order
    pub skills: Vec<SkillCategory>,
    /// `contact` command lines, in display order
    pub contact: Vec<ContactEntry>,
    /// `neofetch` info rows, in display order
    pub system_info: Vec<InfoEntry>,
}

impl Default for Content {
    fn default() -> Self {
        Self {
            banner_art: vec![
                r" _____ _____ ____  __  __ ".to_string(),
                r"|_   _| ____|  _ \|  \/  |".to_string(),
                r"  | | |  _| | |_) | |\/| |".to_string(),
                r"  | | | |___|  _ <| |  | |".to_string(),
                r"  |_| |_____|_| \_\_|  |_|".to_string(),
            ],
            welcome: "Welcome to the terminal!".to_string(),
            about: "Hello, I like to build things for the terminal.".to_string(),
            projects: "404: Not Found - Good things take time.".to_string(),
            resume: "500 - Internal Server Error - Resume not available at the moment."
                .to_string(),
            skills: vec![
                SkillCategory {
                    name: "Systems".to_string(),
                    items: vec!["Rust".to_string(), "C".to_string(), "Linux".to_string()],
                },
                SkillCategory {
                    name: "Backend".to_string(),
                    items: vec![
                        "PostgreSQL".to_string(),
                        "gRPC".to_string(),
                        "Message queues".to_string(),
                    ],
                },
                SkillCategory {
                    name: "Devops".to_string(),
                    items: vec![
                        "Docker".to_string(),
                        "Kubernetes".to_string(),
                        "CI/CD pipelines".to_string(),
                    ],
                },
            ],
            contact: vec![
                ContactEntry {
                    label: "Email".to_string(),
                    value: "hello@example.com".to_string(),
                },
                ContactEntry {
                    label: "GitHub".to_string(),
                    value: "https://github.com/example".to_string(),
                },
            ],
            system_info: vec![
                InfoEntry {
                    label: "OS".to_string(),
                    value: "Fedora Linux 41 (Workstation Edition)".to_string(),
                },
                InfoEntry {
                    label: "Host".to_string(),
                    value: "terminal".to_string(),
                },
                InfoEntry {
                    label: "Kernel".to_string(),
                    value: "Linux 6.13.7-200.fc41.x86_64".to_string(),
                },
                InfoEntry {
                    label: "Uptime".to_string(),
                    value: "Always up".to_string(),
                },
                InfoEntry {
                    label: "Shell".to_string(),
                    value: "bash".to_string(),
                },
                InfoEntry {
                    label: "Memory".to_string(),
                    value: "8.0 GiB".to_string(),
                },
            ],
        }
    }
}
