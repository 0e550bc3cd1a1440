//! Dashboard page identifiers.

use std::fmt;
use std::str::FromStr;

use crate::error::RewardHubError;

/// One of the three dashboards served by the application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Page {
    User,
    Company,
    Admin,
}

impl Page {
    /// All pages, in navigation order.
    pub const ALL: [Page; 3] = [Page::User, Page::Company, Page::Admin];

    /// Page that `/` redirects to.
    pub const DEFAULT: Page = Page::User;

    /// Identifier passed to the template as `page`.
    pub fn as_str(&self) -> &'static str {
        match self {
            Page::User => "user",
            Page::Company => "company",
            Page::Admin => "admin",
        }
    }

    /// Route path the dashboard is mounted at.
    pub fn path(&self) -> &'static str {
        match self {
            Page::User => "/user",
            Page::Company => "/company",
            Page::Admin => "/admin",
        }
    }

    /// Template file rendered for this page.
    pub fn template(&self) -> &'static str {
        match self {
            Page::User => "dashboard_user.html",
            Page::Company => "dashboard_company.html",
            Page::Admin => "dashboard_admin.html",
        }
    }

    /// Navigation label shown in the view switcher.
    pub fn label(&self) -> &'static str {
        match self {
            Page::User => "사용자",
            Page::Company => "기업",
            Page::Admin => "관리자",
        }
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Page {
    type Err = RewardHubError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" => Ok(Page::User),
            "company" => Ok(Page::Company),
            "admin" => Ok(Page::Admin),
            _ => Err(RewardHubError::unknown_page(s)),
        }
    }
}
