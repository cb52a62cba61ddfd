//! Summary statistics over an employee collection.
//!
//! ```rust
//! use roster_widgets::dashboard::Stats;
//! use roster_widgets::employee::{Employee, Status};
//!
//! let employees = vec![
//!     Employee::new(1, "Ada").with_department("Research").with_status(Status::Active),
//!     Employee::new(2, "Alan").with_department("Research"),
//!     Employee::new(3, "Grace"),
//! ];
//!
//! let stats = Stats::from_records(&employees);
//! assert_eq!(stats.total, 3);
//! assert_eq!(stats.active, 1);
//! assert_eq!(stats.department_count, 1);
//! assert_eq!(stats.departments[0].name, "Research");
//! assert_eq!(stats.departments[0].percentage, 67);
//! ```

use lipgloss_extras::prelude::*;
use serde::Serialize;
use unicode_width::UnicodeWidthStr;

use crate::employee::Employee;

/// Bucket name for employees without a department.
pub const UNASSIGNED: &str = "Unassigned";

const BAR_WIDTH: usize = 20;

/// Head count of one department.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DepartmentStat {
    /// Department name, or [`UNASSIGNED`].
    pub name: String,
    /// Number of employees.
    pub count: usize,
    /// Share of all employees, rounded to a whole percent.
    pub percentage: usize,
}

/// Aggregate figures for a collection of employees.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Stats {
    /// Number of employees.
    pub total: usize,
    /// Employees with an active status.
    pub active: usize,
    /// Employees with an inactive status.
    pub inactive: usize,
    /// Distinct non-empty department names.
    pub department_count: usize,
    /// Per-department head counts, largest first. Departments with equal
    /// counts keep the order in which they first appear.
    pub departments: Vec<DepartmentStat>,
}

impl Stats {
    /// Computes the statistics for `employees`.
    pub fn from_records(employees: &[Employee]) -> Self {
        let total = employees.len();
        let active = employees.iter().filter(|e| e.status.is_active()).count();

        let mut departments: Vec<DepartmentStat> = Vec::new();
        for employee in employees {
            let name = employee
                .department
                .as_deref()
                .filter(|d| !d.is_empty())
                .unwrap_or(UNASSIGNED);
            match departments.iter_mut().find(|d| d.name == name) {
                Some(stat) => stat.count += 1,
                None => departments.push(DepartmentStat {
                    name: name.to_string(),
                    count: 1,
                    percentage: 0,
                }),
            }
        }
        for stat in &mut departments {
            stat.percentage = percent(stat.count, total);
        }
        departments.sort_by(|a, b| b.count.cmp(&a.count));

        let department_count = {
            let mut names: Vec<&str> = employees
                .iter()
                .filter_map(|e| e.department.as_deref())
                .filter(|d| !d.is_empty())
                .collect();
            names.sort_unstable();
            names.dedup();
            names.len()
        };

        tracing::debug!(total, active, department_count, "dashboard stats computed");

        Self {
            total,
            active,
            inactive: total - active,
            department_count,
            departments,
        }
    }

    /// Renders the figures and a bar per department.
    pub fn view(&self) -> String {
        let label = Style::new().foreground(AdaptiveColor {
            Light: "#9B9B9B",
            Dark: "#5C5C5C",
        });
        let value = Style::new().bold(true);
        let bar = Style::new().foreground(Color::from("62"));

        let figures = [
            ("Total Employees", self.total),
            ("Active", self.active),
            ("Inactive", self.inactive),
            ("Departments", self.department_count),
        ]
        .iter()
        .map(|(name, n)| {
            format!(
                "{} {}",
                value.clone().render(&n.to_string()),
                label.clone().render(name)
            )
        })
        .collect::<Vec<_>>()
        .join("   ");

        let name_width = self
            .departments
            .iter()
            .map(|d| d.name.width())
            .max()
            .unwrap_or(0);

        let mut lines = vec![figures, String::new()];
        for dept in &self.departments {
            let filled = dept.percentage * BAR_WIDTH / 100;
            let name_fill = " ".repeat(name_width - dept.name.width());
            lines.push(format!(
                "{}{name_fill}  {}{}  {} ({}%)",
                dept.name,
                bar.clone().render(&"█".repeat(filled)),
                " ".repeat(BAR_WIDTH - filled),
                dept.count,
                dept.percentage,
            ));
        }
        lines.join("\n")
    }
}

/// `count / total` as a whole percentage, halves rounded up.
fn percent(count: usize, total: usize) -> usize {
    if total == 0 {
        return 0;
    }
    (count * 200 + total) / (total * 2)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::employee::Status;
    use lipgloss_extras::lipgloss::strip_ansi;
    use pretty_assertions::assert_eq;

    fn employee(id: u64, department: Option<&str>, active: bool) -> Employee {
        let mut e = Employee::new(id, "x").with_status(Status::from(active));
        e.department = department.map(str::to_string);
        e
    }

    #[test]
    fn test_empty() {
        assert_eq!(Stats::from_records(&[]), Stats::default());
    }

    #[test]
    fn test_counts() {
        let employees = vec![
            employee(1, Some("Sales"), true),
            employee(2, Some("Research"), false),
            employee(3, Some("Sales"), true),
            employee(4, None, false),
            employee(5, Some(""), true),
        ];
        let stats = Stats::from_records(&employees);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.active, 3);
        assert_eq!(stats.inactive, 2);
        assert_eq!(stats.department_count, 2);
    }

    #[test]
    fn test_departments_sorted_by_count_stable() {
        let employees = vec![
            employee(1, Some("Research"), true),
            employee(2, None, true),
            employee(3, Some("Sales"), true),
            employee(4, Some("Sales"), true),
            employee(5, Some(""), true),
            employee(6, Some("Legal"), true),
            employee(7, Some("Sales"), true),
            employee(8, Some("Research"), true),
        ];
        let stats = Stats::from_records(&employees);
        let summary: Vec<(&str, usize, usize)> = stats
            .departments
            .iter()
            .map(|d| (d.name.as_str(), d.count, d.percentage))
            .collect();
        assert_eq!(
            summary,
            vec![
                ("Sales", 3, 38),
                ("Research", 2, 25),
                ("Unassigned", 2, 25),
                ("Legal", 1, 13),
            ]
        );
    }

    #[test]
    fn test_percent_rounds_half_up() {
        assert_eq!(percent(1, 8), 13);
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(3, 3), 100);
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn test_view() {
        let stats = Stats::from_records(&[
            employee(1, Some("Research"), true),
            employee(2, Some("Research"), false),
        ]);
        let view = strip_ansi(&stats.view());
        assert!(view.contains("2 Total Employees"));
        assert!(view.contains("1 Active"));
        assert!(view.contains("Research"));
        assert!(view.contains("2 (100%)"));
    }

    #[test]
    fn test_view_aligns_wide_department_names() {
        let stats = Stats::from_records(&[
            employee(1, Some("研究"), true),
            employee(2, Some("Ops"), true),
            employee(3, Some("研究"), true),
        ]);
        let view = strip_ansi(&stats.view());
        let bar_columns: Vec<usize> = view
            .lines()
            .skip(2)
            .map(|line| line.split('█').next().unwrap_or_default().width())
            .collect();
        assert_eq!(bar_columns, vec![6, 6]);
    }
}
