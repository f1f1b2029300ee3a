//! Filterable project gallery state.

use crate::catalog::{project_by_id, Project, ProjectCategory};

/// One of the eight gallery filter keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ProjectFilter {
    #[default]
    All,
    Only(ProjectCategory),
}

impl ProjectFilter {
    /// Filter buttons in display order.
    pub const ALL: [ProjectFilter; 8] = [
        ProjectFilter::All,
        ProjectFilter::Only(ProjectCategory::Business),
        ProjectFilter::Only(ProjectCategory::Portfolio),
        ProjectFilter::Only(ProjectCategory::Landing),
        ProjectFilter::Only(ProjectCategory::WebApp),
        ProjectFilter::Only(ProjectCategory::WordPress),
        ProjectFilter::Only(ProjectCategory::Ecommerce),
        ProjectFilter::Only(ProjectCategory::Saas),
    ];

    pub fn key(self) -> &'static str {
        match self {
            ProjectFilter::All => "all",
            ProjectFilter::Only(c) => c.key(),
        }
    }

    pub fn from_key(key: &str) -> Option<Self> {
        if key == "all" {
            return Some(ProjectFilter::All);
        }
        ProjectCategory::from_key(key).map(ProjectFilter::Only)
    }

    pub fn label(self) -> &'static str {
        match self {
            ProjectFilter::All => "All Projects",
            ProjectFilter::Only(ProjectCategory::Business) => "Business",
            ProjectFilter::Only(ProjectCategory::Portfolio) => "Portfolio",
            ProjectFilter::Only(ProjectCategory::Landing) => "Landing Pages",
            ProjectFilter::Only(ProjectCategory::WebApp) => "Web Apps",
            ProjectFilter::Only(ProjectCategory::WordPress) => "WordPress",
            ProjectFilter::Only(ProjectCategory::Ecommerce) => "E-commerce",
            ProjectFilter::Only(ProjectCategory::Saas) => "SaaS",
        }
    }

    pub fn matches(self, project: &Project) -> bool {
        match self {
            ProjectFilter::All => true,
            ProjectFilter::Only(c) => project.category == c,
        }
    }
}

/// Active filter plus the project open in the detail overlay, if any.
#[derive(Debug, Clone)]
pub struct Gallery<'a> {
    catalog: &'a [Project],
    filter: ProjectFilter,
    selected: Option<&'a Project>,
}

impl<'a> Gallery<'a> {
    pub fn new(catalog: &'a [Project]) -> Self {
        Self {
            catalog,
            filter: ProjectFilter::All,
            selected: None,
        }
    }

    pub fn filter(&self) -> ProjectFilter {
        self.filter
    }

    pub fn set_filter(&mut self, filter: ProjectFilter) {
        self.filter = filter;
    }

    /// Projects passing the active filter, in catalog order.
    pub fn visible(&self) -> Vec<&'a Project> {
        let filter = self.filter;
        self.catalog.iter().filter(|p| filter.matches(p)).collect()
    }

    pub fn selected(&self) -> Option<&'a Project> {
        self.selected
    }

    pub fn is_open(&self) -> bool {
        self.selected.is_some()
    }

    /// Open the overlay on project `id`. Unknown ids leave the state alone.
    pub fn open(&mut self, id: u32) -> Option<&'a Project> {
        let found = project_by_id(self.catalog, id)?;
        self.selected = Some(found);
        Some(found)
    }

    pub fn close(&mut self) {
        self.selected = None;
    }
}
