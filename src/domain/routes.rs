//! The site's route table: every public page, its path, template and title.

use std::fmt;

/// A page the site can render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    Home,
    Skill,
    About,
    Connect,
}

impl Page {
    pub fn route(self) -> &'static SiteRoute {
        match self {
            Page::Home => &ROUTES[0],
            Page::Skill => &ROUTES[1],
            Page::About => &ROUTES[2],
            Page::Connect => &ROUTES[3],
        }
    }

    /// Stable identifier used in logs and metric labels.
    pub fn as_str(self) -> &'static str {
        match self {
            Page::Home => "home",
            Page::Skill => "skill",
            Page::About => "about",
            Page::Connect => "connect",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SiteRoute {
    pub page: Page,
    pub path: &'static str,
    pub template: &'static str,
    pub title: &'static str,
}

/// Ordered route table. Navigation is rendered in this order.
pub const ROUTES: [SiteRoute; 4] = [
    SiteRoute {
        page: Page::Home,
        path: "/",
        template: "base.html",
        title: "Home",
    },
    SiteRoute {
        page: Page::Skill,
        path: "/skill",
        template: "skill.html",
        title: "Skills",
    },
    SiteRoute {
        page: Page::About,
        path: "/about",
        template: "about.html",
        title: "About",
    },
    SiteRoute {
        page: Page::Connect,
        path: "/connect",
        template: "connect.html",
        title: "Connect",
    },
];
