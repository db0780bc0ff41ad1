//! Picks the safest scored route and orders the rest.

use itertools::Itertools;
use log::info;
use serde::Serialize;

use crate::error::{Result, SafeRouteError};
use crate::route::ScoredRoute;

/// The route with the highest score. On a tie the earliest one wins.
pub fn select_safest(routes: &[ScoredRoute]) -> Result<&ScoredRoute> {
    routes
        .iter()
        .reduce(|best, r| if r.safety_score > best.safety_score { r } else { best })
        .ok_or(SafeRouteError::EmptyRouteSet)
}

/// Routes ordered by descending score. Never empty.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct RankedRoutes(Vec<ScoredRoute>);

impl RankedRoutes {
    pub fn safest(&self) -> &ScoredRoute {
        &self.0[0]
    }

    pub fn alternatives(&self) -> &[ScoredRoute] {
        &self.0[1..]
    }

    pub fn all(&self) -> &[ScoredRoute] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn into_vec(self) -> Vec<ScoredRoute> {
        self.0
    }
}

/// Stable: routes with equal scores keep their input order.
pub fn rank_routes(routes: Vec<ScoredRoute>) -> Result<RankedRoutes> {
    if routes.is_empty() {
        return Err(SafeRouteError::EmptyRouteSet);
    }

    let ranked: Vec<ScoredRoute> = routes
        .into_iter()
        .sorted_by(|a, b| b.safety_score.total_cmp(&a.safety_score))
        .collect();

    info!(
        "Ranked {} routes, scores: {}",
        ranked.len(),
        ranked.iter().map(|r| format!("{:.1}", r.safety_score)).join(", ")
    );

    Ok(RankedRoutes(ranked))
}
