//! List filter
//!
//! Exact model match plus AND semantics over techs: a robot matches only if
//! it carries every requested tech.

use super::robot::Robot;

/// Filter applied by [`RobotStore::list`](super::RobotStore::list).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RobotFilter {
    pub model: Option<String>,
    pub techs: Vec<String>,
}

impl RobotFilter {
    /// Matches every robot
    pub fn all() -> Self {
        Self::default()
    }

    /// Builds a filter from raw query values.
    ///
    /// Empty strings mean "no constraint"; `tech` is comma-separated.
    pub fn from_query(model: Option<&str>, tech: Option<&str>) -> Self {
        let model = model.filter(|m| !m.is_empty()).map(str::to_string);
        let techs = match tech {
            Some(t) if !t.is_empty() => t.split(',').map(str::to_string).collect(),
            _ => Vec::new(),
        };
        Self { model, techs }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = Some(model.into());
        self
    }

    pub fn with_tech(mut self, tech: impl Into<String>) -> Self {
        self.techs.push(tech.into());
        self
    }

    pub fn matches(&self, robot: &Robot) -> bool {
        if let Some(model) = &self.model {
            if &robot.model != model {
                return false;
            }
        }
        robot.has_all_techs(&self.techs)
    }
}
