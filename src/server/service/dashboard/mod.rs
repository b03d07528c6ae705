//! Engineering dashboards built from periodic project snapshots.
//!
//! Every report is returned in chronological order with a trend attached to each
//! snapshot after the first.

pub mod trend;

#[cfg(test)]
mod test;

use std::collections::BTreeMap;

use sea_orm::DatabaseConnection;
use uuid::Uuid;

use crate::{
    model::dashboard::{
        ActionItemReportDto, ActionItemTrendDto, AuditDto, AuditTrendDto, AverageScoreDto,
        EngineeringHealthDto, EngineeringHealthTrendDto, GroupAuditDto,
        GroupEngineeringHealthDto, WorkSurveyDto, WorkSurveyTrendDto, WorkSurveysDto,
    },
    server::{
        data::dashboard::DashboardRepository,
        error::{dashboard::DashboardError, AppError},
        model::dashboard::{display_quarter, Project},
    },
};

use trend::{percent_change, trends};

/// Number of most recent quarters shown on the score dashboards.
pub const QUARTER_LIMIT: usize = 4;

const WORK_SURVEY_DATE_FORMAT: &str = "%d/%m";

/// Scores recorded in one quarter, across projects and areas.
struct QuarterScores {
    quarter: String,
    scores: Vec<(String, f64)>,
}

impl QuarterScores {
    fn average(&self) -> f64 {
        mean(self.scores.iter().map(|(_, score)| *score))
    }

    /// Average score of one area; zero when the area has no scores this quarter.
    fn area(&self, area: &str) -> f64 {
        mean(
            self.scores
                .iter()
                .filter(|(name, _)| name == area)
                .map(|(_, score)| *score),
        )
    }
}

fn mean(values: impl Iterator<Item = f64>) -> f64 {
    let (sum, count) = values.fold((0.0, 0u32), |(sum, count), v| (sum + v, count + 1));
    if count == 0 {
        return 0.0;
    }
    sum / f64::from(count)
}

/// Groups `(quarter, area, score)` rows by quarter and keeps the latest `limit`
/// quarters in chronological order.
fn latest_quarters(rows: Vec<(String, String, f64)>, limit: usize) -> Vec<QuarterScores> {
    let mut by_quarter: BTreeMap<String, Vec<(String, f64)>> = BTreeMap::new();
    for (quarter, area, score) in rows {
        by_quarter.entry(quarter).or_default().push((area, score));
    }

    let skip = by_quarter.len().saturating_sub(limit);
    by_quarter
        .into_iter()
        .skip(skip)
        .map(|(quarter, scores)| QuarterScores { quarter, scores })
        .collect()
}

fn average_scores(quarters: &[QuarterScores]) -> Result<Vec<AverageScoreDto>, AppError> {
    let averages: Vec<f64> = quarters.iter().map(QuarterScores::average).collect();

    quarters
        .iter()
        .zip(averages.iter().zip(trends(&averages)))
        .map(|(quarter, (avg, trend))| {
            Ok(AverageScoreDto {
                quarter: display_quarter(&quarter.quarter)?,
                avg: *avg,
                trend,
            })
        })
        .collect()
}

pub struct DashboardService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DashboardService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    async fn project(&self, project_id: Uuid) -> Result<Project, AppError> {
        DashboardRepository::new(self.db)
            .find_project(project_id)
            .await?
            .ok_or_else(|| DashboardError::ProjectNotFound.into())
    }

    /// Gets a project's work survey history.
    ///
    /// # Returns
    /// - `Ok(WorkSurveysDto)` - Surveys oldest first, each after the first with a trend
    /// - `Err(AppError::DashboardErr(ProjectNotFound))` - No project with that id
    pub async fn work_surveys(&self, project_id: Uuid) -> Result<WorkSurveysDto, AppError> {
        let project = self.project(project_id).await?;

        let mut surveys = DashboardRepository::new(self.db)
            .work_surveys(project_id)
            .await?;
        surveys.reverse();

        let work_surveys = surveys
            .iter()
            .enumerate()
            .map(|(i, survey)| {
                let trend = i.checked_sub(1).map(|p| {
                    let previous = &surveys[p];
                    WorkSurveyTrendDto {
                        workload: percent_change(previous.workload, survey.workload),
                        deadline: percent_change(previous.deadline, survey.deadline),
                        learning: percent_change(previous.learning, survey.learning),
                    }
                });

                WorkSurveyDto {
                    end_date: survey.end_date.format(WORK_SURVEY_DATE_FORMAT).to_string(),
                    workload: survey.workload,
                    deadline: survey.deadline,
                    learning: survey.learning,
                    trend,
                }
            })
            .collect();

        Ok(WorkSurveysDto {
            project: project.into_dto(),
            work_surveys,
        })
    }

    /// Counts a project's audit action items per quarter and priority.
    ///
    /// # Returns
    /// - `Ok(Vec<ActionItemReportDto>)` - One report per quarter, oldest first
    /// - `Err(AppError::DashboardErr(ProjectNotFound))` - No project with that id
    pub async fn action_items(
        &self,
        project_id: Uuid,
    ) -> Result<Vec<ActionItemReportDto>, AppError> {
        self.project(project_id).await?;

        let items = DashboardRepository::new(self.db)
            .action_items(project_id)
            .await?;

        let mut counts: BTreeMap<String, [i64; 3]> = BTreeMap::new();
        for item in items {
            let slot = match item.priority.as_str() {
                "high" => 0,
                "medium" => 1,
                "low" => 2,
                other => {
                    tracing::warn!("Skipping action item {} with priority {}", item.id, other);
                    continue;
                }
            };
            counts.entry(item.quarter).or_default()[slot] += 1;
        }

        let counts: Vec<(String, [i64; 3])> = counts.into_iter().collect();
        counts
            .iter()
            .enumerate()
            .map(|(i, (quarter, [high, medium, low]))| {
                let trend = i.checked_sub(1).map(|p| {
                    let [prev_high, prev_medium, prev_low] = counts[p].1;
                    ActionItemTrendDto {
                        high: percent_change(prev_high as f64, *high as f64),
                        medium: percent_change(prev_medium as f64, *medium as f64),
                        low: percent_change(prev_low as f64, *low as f64),
                    }
                });

                Ok(ActionItemReportDto {
                    quarter: display_quarter(quarter)?,
                    high: *high,
                    medium: *medium,
                    low: *low,
                    trend,
                })
            })
            .collect()
    }

    /// Gets engineering health averages and per-area groups for the latest quarters.
    pub async fn engineering_health(&self) -> Result<EngineeringHealthDto, AppError> {
        let rows = DashboardRepository::new(self.db)
            .engineering_health_scores()
            .await?
            .into_iter()
            .map(|row| (row.quarter, row.area, row.score))
            .collect();
        let quarters = latest_quarters(rows, QUARTER_LIMIT);

        let groups: Vec<GroupEngineeringHealthDto> = quarters
            .iter()
            .map(|q| {
                Ok(GroupEngineeringHealthDto {
                    quarter: display_quarter(&q.quarter)?,
                    delivery: q.area("delivery"),
                    quality: q.area("quality"),
                    collaboration: q.area("collaboration"),
                    feedback: q.area("feedback"),
                    trend: None,
                })
            })
            .collect::<Result<_, AppError>>()?;

        let groups = groups
            .iter()
            .enumerate()
            .map(|(i, group)| {
                let trend = i.checked_sub(1).map(|p| {
                    let previous = &groups[p];
                    EngineeringHealthTrendDto {
                        delivery: percent_change(previous.delivery, group.delivery),
                        quality: percent_change(previous.quality, group.quality),
                        collaboration: percent_change(previous.collaboration, group.collaboration),
                        feedback: percent_change(previous.feedback, group.feedback),
                    }
                });
                GroupEngineeringHealthDto {
                    trend,
                    ..group.clone()
                }
            })
            .collect();

        Ok(EngineeringHealthDto {
            average: average_scores(&quarters)?,
            groups,
        })
    }

    /// Gets audit averages and per-area groups for the latest quarters.
    pub async fn audits(&self) -> Result<AuditDto, AppError> {
        let rows = DashboardRepository::new(self.db)
            .audit_scores()
            .await?
            .into_iter()
            .map(|row| (row.quarter, row.area, row.score))
            .collect();
        let quarters = latest_quarters(rows, QUARTER_LIMIT);

        let groups: Vec<GroupAuditDto> = quarters
            .iter()
            .map(|q| {
                Ok(GroupAuditDto {
                    quarter: display_quarter(&q.quarter)?,
                    frontend: q.area("frontend"),
                    backend: q.area("backend"),
                    system: q.area("system"),
                    process: q.area("process"),
                    mobile: q.area("mobile"),
                    blockchain: q.area("blockchain"),
                    trend: None,
                })
            })
            .collect::<Result<_, AppError>>()?;

        let groups = groups
            .iter()
            .enumerate()
            .map(|(i, group)| {
                let trend = i.checked_sub(1).map(|p| {
                    let previous = &groups[p];
                    AuditTrendDto {
                        frontend: percent_change(previous.frontend, group.frontend),
                        backend: percent_change(previous.backend, group.backend),
                        system: percent_change(previous.system, group.system),
                        process: percent_change(previous.process, group.process),
                        mobile: percent_change(previous.mobile, group.mobile),
                        blockchain: percent_change(previous.blockchain, group.blockchain),
                    }
                });
                GroupAuditDto {
                    trend,
                    ..group.clone()
                }
            })
            .collect();

        Ok(AuditDto {
            average: average_scores(&quarters)?,
            groups,
        })
    }
}
