// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

//! Achievements derived from progress
//!
//! Never persisted: each read compares the current values against a fixed,
//! ordered list of thresholds.

use crate::progress::ProgressReport;
use serde::Serialize;

/// The quantity an achievement is measured against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Metric {
    CompletedLessons,
    CompletedModules,
    GradedAssignments,
    OverallPercent,
}

/// A named threshold
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AchievementDef {
    pub id: &'static str,
    pub title: &'static str,
    pub metric: Metric,
    pub threshold: u32,
}

/// Fixed achievement ladder, in display order
pub const ACHIEVEMENTS: &[AchievementDef] = &[
    AchievementDef {
        id: "first-steps",
        title: "First Steps",
        metric: Metric::CompletedLessons,
        threshold: 1,
    },
    AchievementDef {
        id: "dedicated-learner",
        title: "Dedicated Learner",
        metric: Metric::CompletedLessons,
        threshold: 10,
    },
    AchievementDef {
        id: "module-master",
        title: "Module Master",
        metric: Metric::CompletedModules,
        threshold: 1,
    },
    AchievementDef {
        id: "first-grade",
        title: "First Grade",
        metric: Metric::GradedAssignments,
        threshold: 1,
    },
    AchievementDef {
        id: "halfway-there",
        title: "Halfway There",
        metric: Metric::OverallPercent,
        threshold: 50,
    },
    AchievementDef {
        id: "well-rounded",
        title: "Well Rounded",
        metric: Metric::CompletedModules,
        threshold: 3,
    },
    AchievementDef {
        id: "certified",
        title: "Certified",
        metric: Metric::OverallPercent,
        threshold: 100,
    },
];

/// Inputs the ladder is evaluated against
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ProgressMetrics {
    pub completed_lessons: u32,
    pub completed_modules: u32,
    pub graded_assignments: u32,
    pub overall_percent: u32,
}

impl ProgressMetrics {
    /// Graded assignments come from the assignment feed, not the ledger
    pub fn from_report(report: &ProgressReport, graded_assignments: u32) -> Self {
        Self {
            completed_lessons: report.completed_lessons,
            completed_modules: report.completed_modules(),
            graded_assignments,
            overall_percent: u32::from(report.overall_percent()),
        }
    }

    pub fn value(&self, metric: Metric) -> u32 {
        match metric {
            Metric::CompletedLessons => self.completed_lessons,
            Metric::CompletedModules => self.completed_modules,
            Metric::GradedAssignments => self.graded_assignments,
            Metric::OverallPercent => self.overall_percent,
        }
    }
}

/// An achievement with its earned state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub title: &'static str,
    pub metric: Metric,
    pub threshold: u32,
    pub value: u32,
    pub earned: bool,
}

/// Evaluate the full ladder, preserving its order
pub fn evaluate(metrics: &ProgressMetrics) -> Vec<Achievement> {
    ACHIEVEMENTS
        .iter()
        .map(|def| {
            let value = metrics.value(def.metric);
            Achievement {
                id: def.id,
                title: def.title,
                metric: def.metric,
                threshold: def.threshold,
                value,
                earned: value >= def.threshold,
            }
        })
        .collect()
}

#[cfg(test)]
#[path = "achievement_tests.rs"]
mod tests;
