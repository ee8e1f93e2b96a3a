use std::collections::HashSet;

use caliope_core::config::{AppConfig, LoadOptions};
use caliope_core::loyalty::{LEVELS, REWARDS};
use caliope_core::Catalog;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
enum CheckStatus {
    Pass,
    Fail,
}

#[derive(Debug, Serialize)]
struct DoctorCheck {
    name: &'static str,
    status: CheckStatus,
    details: String,
}

#[derive(Debug, Serialize)]
struct DoctorReport {
    overall_status: CheckStatus,
    summary: String,
    checks: Vec<DoctorCheck>,
}

pub fn run(json_output: bool) -> String {
    let report = build_report();

    if json_output {
        return serde_json::to_string_pretty(&report).unwrap_or_else(|error| {
            format!(
                "{{\"overall_status\":\"fail\",\"summary\":\"doctor serialization failed\",\"error\":\"{}\"}}",
                escape_json(&error.to_string())
            )
        });
    }

    render_human(&report)
}

fn build_report() -> DoctorReport {
    let checks = vec![
        check_config(),
        check_loyalty_tiers(),
        check_reward_levels(),
        check_catalog_integrity(),
    ];

    let all_pass = checks.iter().all(|check| check.status == CheckStatus::Pass);
    let overall_status = if all_pass { CheckStatus::Pass } else { CheckStatus::Fail };
    let summary = if all_pass {
        "doctor: all readiness checks passed".to_string()
    } else {
        "doctor: one or more readiness checks failed".to_string()
    };

    DoctorReport { overall_status, summary, checks }
}

fn check_config() -> DoctorCheck {
    match AppConfig::load(LoadOptions::default()) {
        Ok(_) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Pass,
            details: "configuration loaded and validated".to_string(),
        },
        Err(error) => DoctorCheck {
            name: "config_validation",
            status: CheckStatus::Fail,
            details: error.to_string(),
        },
    }
}

fn check_loyalty_tiers() -> DoctorCheck {
    let name = "loyalty_tiers";

    if LEVELS.first().map(|level| level.min_points) != Some(0) {
        return DoctorCheck {
            name,
            status: CheckStatus::Fail,
            details: "lowest tier must start at 0 points".to_string(),
        };
    }

    for pair in LEVELS.windows(2) {
        if pair[0].next_level_points != Some(pair[1].min_points)
            || pair[0].min_points >= pair[1].min_points
        {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!(
                    "tiers {} and {} do not form a contiguous ascending range",
                    pair[0].level, pair[1].level
                ),
            };
        }
    }

    if LEVELS.last().and_then(|level| level.next_level_points).is_some() {
        return DoctorCheck {
            name,
            status: CheckStatus::Fail,
            details: "highest tier must not have a ceiling".to_string(),
        };
    }

    DoctorCheck {
        name,
        status: CheckStatus::Pass,
        details: format!("{} contiguous tiers starting at 0 points", LEVELS.len()),
    }
}

fn check_reward_levels() -> DoctorCheck {
    let name = "reward_levels";
    let tier_count = LEVELS.len() as u8;

    let mut ids = HashSet::new();
    for reward in REWARDS {
        if !ids.insert(reward.id) {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!("duplicate reward id `{}`", reward.id),
            };
        }
        if reward.level == 0 || reward.level > tier_count {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!(
                    "reward `{}` references unknown tier {}",
                    reward.id, reward.level
                ),
            };
        }
    }

    for level in LEVELS {
        if !REWARDS.iter().any(|reward| reward.level == level.level) {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!("tier {} unlocks no rewards", level.level),
            };
        }
    }

    DoctorCheck {
        name,
        status: CheckStatus::Pass,
        details: format!("{} rewards cover all {} tiers", REWARDS.len(), LEVELS.len()),
    }
}

fn check_catalog_integrity() -> DoctorCheck {
    let name = "catalog_integrity";
    let catalog = Catalog::seeded();

    if catalog.services().is_empty()
        || catalog.products().is_empty()
        || catalog.memberships().is_empty()
    {
        return DoctorCheck {
            name,
            status: CheckStatus::Fail,
            details: "seed catalog is missing services, products, or membership plans".to_string(),
        };
    }

    let mut ids = HashSet::new();
    for service in catalog.services() {
        if !ids.insert(service.id.0.clone()) {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!("duplicate catalog id `{}`", service.id.0),
            };
        }
        if service.price <= Decimal::ZERO {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!("service `{}` has a non-positive price", service.id.0),
            };
        }
    }
    for product in catalog.products() {
        if !ids.insert(product.id.0.clone()) {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!("duplicate catalog id `{}`", product.id.0),
            };
        }
        if product.price <= Decimal::ZERO {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!("product `{}` has a non-positive price", product.id.0),
            };
        }
    }
    for membership in catalog.memberships() {
        if !ids.insert(membership.id.0.clone()) {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!("duplicate catalog id `{}`", membership.id.0),
            };
        }
        if membership.price <= Decimal::ZERO {
            return DoctorCheck {
                name,
                status: CheckStatus::Fail,
                details: format!("membership `{}` has a non-positive price", membership.id.0),
            };
        }
    }

    DoctorCheck {
        name,
        status: CheckStatus::Pass,
        details: format!(
            "{} services, {} products, {} membership plans with unique ids and positive prices",
            catalog.services().len(),
            catalog.products().len(),
            catalog.memberships().len()
        ),
    }
}

fn render_human(report: &DoctorReport) -> String {
    let mut lines = Vec::new();
    lines.push(report.summary.clone());

    for check in &report.checks {
        let marker = match check.status {
            CheckStatus::Pass => "ok",
            CheckStatus::Fail => "fail",
        };
        lines.push(format!("- [{marker}] {}: {}", check.name, check.details));
    }

    lines.join("\n")
}

fn escape_json(value: &str) -> String {
    value.replace('\\', "\\\\").replace('"', "\\\"")
}
