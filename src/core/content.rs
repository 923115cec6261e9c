//! # Content
//!
//! Static data the session shows: menu entries, portfolio projects, server
//! records and the about page. Built once at startup (defaults, optionally
//! replaced from the config file) and never mutated afterwards.

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

use crate::core::state::View;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuEntry {
    pub label: String,
    pub icon: &'static str,
    pub description: String,
    pub target: View,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Project {
    pub name: String,
    pub description: String,
    #[serde(default)]
    pub tech: Vec<String>,
    pub url: String,
    pub status: String,
    #[serde(default)]
    pub emoji: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Server {
    pub name: String,
    pub host: String,
    pub description: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub tag: String,
}

/// One row in the list browser.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Record {
    Project(Project),
    Server(Server),
}

impl Record {
    pub fn name(&self) -> &str {
        match self {
            Record::Project(p) => &p.name,
            Record::Server(s) => &s.name,
        }
    }
}

/// Which record list the browser view shows.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Catalog {
    #[default]
    Portfolio,
    Servers,
}

impl Catalog {
    pub fn label(self) -> &'static str {
        match self {
            Catalog::Portfolio => "Portfolio",
            Catalog::Servers => "Server Directory",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "portfolio" | "projects" => Some(Catalog::Portfolio),
            "servers" => Some(Catalog::Servers),
            _ => None,
        }
    }
}

/// About page: a headline followed by labelled sections.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AboutPage {
    pub headline: String,
    pub sections: Vec<(String, String)>,
    pub links: Vec<(String, String)>,
}

/// Everything the views render, resolved at startup.
#[derive(Debug, Clone)]
pub struct Content {
    pub catalog: Catalog,
    pub menu: Vec<MenuEntry>,
    pub records: Vec<Record>,
    pub about: AboutPage,
    pub quote: String,
}

impl Content {
    /// Assemble content for a catalog. Empty overrides fall back to defaults.
    pub fn new(catalog: Catalog, projects: Vec<Project>, servers: Vec<Server>) -> Self {
        let records = match catalog {
            Catalog::Portfolio => {
                let projects = if projects.is_empty() {
                    default_projects()
                } else {
                    projects
                };
                projects.into_iter().map(Record::Project).collect()
            }
            Catalog::Servers => {
                let servers = if servers.is_empty() {
                    default_servers()
                } else {
                    servers
                };
                servers.into_iter().map(Record::Server).collect()
            }
        };

        Self {
            catalog,
            menu: default_menu(catalog),
            records,
            about: default_about(),
            quote: random_quote().to_string(),
        }
    }
}

impl Default for Content {
    fn default() -> Self {
        Self::new(Catalog::default(), Vec::new(), Vec::new())
    }
}

pub fn default_menu(catalog: Catalog) -> Vec<MenuEntry> {
    let browse_description = match catalog {
        Catalog::Portfolio => "Projects, work, and cool stuff",
        Catalog::Servers => "Machines you can SSH into",
    };
    vec![
        MenuEntry {
            label: "About & Welcome".to_string(),
            icon: "👋",
            description: "Who is this mysterious person?".to_string(),
            target: View::About,
        },
        MenuEntry {
            label: catalog.label().to_string(),
            icon: match catalog {
                Catalog::Portfolio => "🚀",
                Catalog::Servers => "🖧",
            },
            description: browse_description.to_string(),
            target: View::ListBrowse,
        },
        MenuEntry {
            label: "Play Snake!".to_string(),
            icon: "🐍",
            description: "Take a break, you deserve it".to_string(),
            target: View::Game,
        },
    ]
}

fn project(
    name: &str,
    description: &str,
    tech: &[&str],
    url: &str,
    status: &str,
    emoji: &str,
) -> Project {
    Project {
        name: name.to_string(),
        description: description.to_string(),
        tech: tech.iter().map(|t| t.to_string()).collect(),
        url: url.to_string(),
        status: status.to_string(),
        emoji: emoji.to_string(),
    }
}

pub fn default_projects() -> Vec<Project> {
    vec![
        project(
            "Terminal Portal",
            "This very portal: a menu, a project browser and a snake game in your terminal.",
            &["Rust", "Ratatui", "Crossterm"],
            "ssh portal.example.net",
            "Live",
            "🟢",
        ),
        project(
            "Lingo Pipeline",
            "Manage localization and translation as code, and never miss a string.",
            &["Rust", "Postgres", "GitHub"],
            "lingo.example.net",
            "Closed Preview",
            "🔵",
        ),
        project(
            "Personal Blog",
            "Somewhere to write things down.",
            &["Static Site"],
            "https://blog.example.net",
            "Live",
            "🟢",
        ),
        project(
            "Dev Directory",
            "A link page for the local developer community.",
            &["Rust", "Axum"],
            "devs.example.net",
            "Ongoing",
            "🟡",
        ),
        project(
            "Secret Project",
            "Classified. Check back later.",
            &["Rust"],
            "¯\\_(ツ)_/¯",
            "Ongoing",
            "🔴",
        ),
    ]
}

fn server(name: &str, host: &str, description: &str, icon: &str, tag: &str) -> Server {
    Server {
        name: name.to_string(),
        host: host.to_string(),
        description: description.to_string(),
        icon: icon.to_string(),
        tag: tag.to_string(),
    }
}

pub fn default_servers() -> Vec<Server> {
    vec![
        server(
            "This Portal",
            "ssh portal.example.net -p 2222",
            "You are here.",
            "🌀",
            "portal",
        ),
        server(
            "Main Server",
            "ssh example.net",
            "The homelab box. Runs everything.",
            "🖥",
            "homelab",
        ),
        server(
            "Dev Box",
            "ssh dev.example.net",
            "Where code is born (and sometimes dies).",
            "💻",
            "dev",
        ),
        server(
            "Staging",
            "ssh staging.example.net",
            "It works on staging, I swear.",
            "🧪",
            "staging",
        ),
    ]
}

pub fn default_about() -> AboutPage {
    let pair = |a: &str, b: &str| (a.to_string(), b.to_string());
    AboutPage {
        headline: "Hey, welcome aboard! 👾".to_string(),
        sections: vec![
            pair(
                "What I do",
                "Developer, homelab nerd, terminal maximalist. I build things, break them, learn why, and repeat.",
            ),
            pair(
                "Currently into",
                "Rust, self-hosting everything, CLI aesthetics.",
            ),
            pair("Stack", "Rust · Linux · Docker · Postgres"),
        ],
        links: vec![
            pair("🌐 Web", "https://example.net"),
            pair("🐙 GitHub", "https://github.com/example"),
            pair("📡 SSH", "ssh portal.example.net -p 2222"),
        ],
    }
}

const QUOTES: &[&str] = &[
    "\"Not all treasure is silver and gold, mate.\" 🏴‍☠️",
    "\"Why is the rum always gone?\" 🥃",
    "\"The problem is not the problem. The problem is your attitude about the problem.\" ☠️",
    "\"Wherever we want to go, we go.\" 🗺️",
    "\"Why fight when you can negotiate?\" 🫙",
];

fn random_quote() -> &'static str {
    use rand::seq::IndexedRandom;
    QUOTES.choose(&mut rand::rng()).copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_targets_each_view_once() {
        let menu = default_menu(Catalog::Portfolio);
        let targets: Vec<View> = menu.iter().map(|m| m.target).collect();
        assert_eq!(targets, vec![View::About, View::ListBrowse, View::Game]);
        assert_eq!(menu[1].label, "Portfolio");
    }

    #[test]
    fn test_servers_catalog_relabels_browse_entry() {
        let menu = default_menu(Catalog::Servers);
        assert_eq!(menu[1].label, "Server Directory");
    }

    #[test]
    fn test_empty_override_falls_back_to_defaults() {
        let content = Content::new(Catalog::Servers, Vec::new(), Vec::new());
        assert_eq!(content.records.len(), default_servers().len());
        assert!(matches!(content.records[0], Record::Server(_)));
    }

    #[test]
    fn test_project_override_replaces_defaults() {
        let custom = vec![project("Only", "one", &[], "x", "Live", "")];
        let content = Content::new(Catalog::Portfolio, custom, Vec::new());
        assert_eq!(content.records.len(), 1);
        assert_eq!(content.records[0].name(), "Only");
    }

    #[test]
    fn test_catalog_parse() {
        assert_eq!(Catalog::parse("Servers"), Some(Catalog::Servers));
        assert_eq!(Catalog::parse(" projects "), Some(Catalog::Portfolio));
        assert_eq!(Catalog::parse("nope"), None);
    }

    #[test]
    fn test_quote_is_picked() {
        assert!(QUOTES.contains(&random_quote()));
    }
}
