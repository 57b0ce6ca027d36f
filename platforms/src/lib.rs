use std::collections::HashSet;

use thiserror::Error;
use tracing::{debug, trace};

mod manifest;

pub use manifest::{get_min_platforms, Manifest};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Robot {
    pub index: usize,
    pub weight: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Single(Robot),
    Pair(Robot, Robot),
}

impl Platform {
    pub fn robots(&self) -> Vec<Robot> {
        match *self {
            Platform::Single(r) => vec![r],
            Platform::Pair(l, r) => vec![l, r],
        }
    }

    /// Total weight on the platform.
    pub fn load(&self) -> u64 {
        self.robots().iter().map(|r| r.weight).sum()
    }

    pub fn len(&self) -> usize {
        match self {
            Platform::Single(_) => 1,
            Platform::Pair(..) => 2,
        }
    }
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlatformError {
    #[error("Platform weight limit must be positive")]
    ZeroLimit,

    #[error("Robot {index} weighs {weight}, more than the platform limit {limit}")]
    RobotExceedsLimit { index: usize, weight: u64, limit: u64 },
}

#[derive(Error, Debug, PartialEq, Eq)]
pub enum PlanError {
    #[error("Robot {0} is not on any platform")]
    MissingRobot(usize),

    #[error("Robot {0} is on more than one platform")]
    DuplicateRobot(usize),

    #[error("Platform carries robot {0}, which is not in the input")]
    UnknownRobot(usize),

    #[error("Robot {index} recorded with weight {recorded}, input says {actual}")]
    WeightMismatch {
        index: usize,
        recorded: u64,
        actual: u64,
    },

    #[error("Platform {platform} carries {load}, over the limit {limit}")]
    Overloaded {
        platform: usize,
        load: u128,
        limit: u64,
    },
}

#[derive(Debug, Clone, Copy)]
enum Load {
    Single(usize),
    Pair(usize, usize),
}

fn check_robots(weights: &[u64], limit: u64) -> Result<(), PlatformError> {
    if limit == 0 {
        return Err(PlatformError::ZeroLimit);
    }

    match weights.iter().enumerate().find(|&(_, &w)| w > limit) {
        Some((index, &weight)) => Err(PlatformError::RobotExceedsLimit {
            index,
            weight,
            limit,
        }),
        None => Ok(()),
    }
}

/// Greedy two-pointer walk over ascending `sorted` weights. Reports every
/// platform as positions into `sorted` and returns how many were used.
///
/// If the heaviest remaining robot does not fit with the lightest remaining
/// one, it fits with nobody and has to go alone.
fn load_greedily<F>(sorted: &[u64], limit: u64, mut on_load: F) -> usize
where
    F: FnMut(Load),
{
    let Some(mut high) = sorted.len().checked_sub(1) else {
        return 0;
    };
    let mut low = 0;
    let mut platforms = 0;

    while low <= high {
        platforms += 1;

        if low == high {
            trace!(low, "last robot goes alone");
            on_load(Load::Single(high));
            break;
        }

        // every weight is <= limit, so this is `sorted[low] + sorted[high] <= limit`
        if sorted[high] <= limit - sorted[low] {
            trace!(low, high, "pair");
            on_load(Load::Pair(low, high));
            low += 1;
        } else {
            trace!(low, high, "heaviest goes alone");
            on_load(Load::Single(high));
        }
        high -= 1;
    }

    platforms
}

/// Minimum number of platforms carrying at most two robots each, with no
/// platform loaded over `limit`.
///
/// Rejects a zero limit and any robot heavier than the limit up front.
pub fn optimal_number_of_platforms(weights: &[u64], limit: u64) -> Result<usize, PlatformError> {
    check_robots(weights, limit)?;

    let mut sorted = weights.to_vec();
    sorted.sort_unstable();

    let platforms = load_greedily(&sorted, limit, |_| {});

    debug!(robots = weights.len(), limit, platforms, "optimized");

    Ok(platforms)
}

/// Same as [`optimal_number_of_platforms`], but returns which robots go on
/// which platform, in the order the platforms get loaded.
pub fn plan_platforms(weights: &[u64], limit: u64) -> Result<Vec<Platform>, PlatformError> {
    check_robots(weights, limit)?;

    let mut robots = weights
        .iter()
        .enumerate()
        .map(|(index, &weight)| Robot { index, weight })
        .collect::<Vec<_>>();
    robots.sort_by_key(|r| r.weight);

    let sorted = robots.iter().map(|r| r.weight).collect::<Vec<_>>();

    let mut plan = Vec::with_capacity(robots.len());
    load_greedily(&sorted, limit, |load| {
        plan.push(match load {
            Load::Single(i) => Platform::Single(robots[i]),
            Load::Pair(l, h) => Platform::Pair(robots[l], robots[h]),
        })
    });

    debug!(robots = weights.len(), limit, platforms = plan.len(), "planned");

    Ok(plan)
}

/// Checks that `plan` puts every robot of `weights` on exactly one platform
/// and that no platform goes over `limit`.
pub fn verify_plan(weights: &[u64], limit: u64, plan: &[Platform]) -> Result<(), PlanError> {
    let mut seen = HashSet::with_capacity(weights.len());

    for (platform, p) in plan.iter().enumerate() {
        let mut load = 0u128;

        for robot in p.robots() {
            let actual = *weights
                .get(robot.index)
                .ok_or(PlanError::UnknownRobot(robot.index))?;

            if actual != robot.weight {
                return Err(PlanError::WeightMismatch {
                    index: robot.index,
                    recorded: robot.weight,
                    actual,
                });
            }

            if !seen.insert(robot.index) {
                return Err(PlanError::DuplicateRobot(robot.index));
            }

            load += u128::from(robot.weight);
        }

        if load > u128::from(limit) {
            return Err(PlanError::Overloaded {
                platform,
                load,
                limit,
            });
        }
    }

    match (0..weights.len()).find(|i| !seen.contains(i)) {
        Some(missing) => Err(PlanError::MissingRobot(missing)),
        None => Ok(()),
    }
}
