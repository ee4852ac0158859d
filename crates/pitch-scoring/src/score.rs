/// Deterministic scorer: weighted overall score plus a rule-chain recommendation.
///
/// Pure and total. Inputs are used as given; range checks belong to the caller.
use crate::model::{round2, Recommendation, ScoreResult, ScoreVector};

pub const MARKET_WEIGHT: f64 = 0.40;
pub const BUSINESS_WEIGHT: f64 = 0.20;
pub const TEAM_WEIGHT: f64 = 0.20;
pub const TRACTION_WEIGHT: f64 = 0.15;
/// Subtracted, not added.
pub const RISK_WEIGHT: f64 = 0.15;

/// Score a vector. The overall score is rounded for output but never clamped.
pub fn score(vector: &ScoreVector) -> ScoreResult {
    let overall = weighted_overall(vector);
    ScoreResult {
        overall_score: round2(overall),
        recommendation: recommend(vector, overall),
        breakdown: *vector,
    }
}

/// Unrounded weighted sum.
pub fn weighted_overall(v: &ScoreVector) -> f64 {
    MARKET_WEIGHT * v.market
        + BUSINESS_WEIGHT * v.business
        + TEAM_WEIGHT * v.team
        + TRACTION_WEIGHT * v.traction
        - RISK_WEIGHT * v.risk
}

/// Ordered rule chain; the first matching rule wins.
fn recommend(v: &ScoreVector, overall: f64) -> Recommendation {
    if v.market < 5.0 {
        Recommendation::Avoid
    } else if v.risk > 8.0 {
        Recommendation::Avoid
    } else if v.team >= 8.0 && v.traction >= 7.0 {
        Recommendation::StrongInvest
    } else if overall >= 7.0 {
        Recommendation::Invest
    } else {
        Recommendation::Consider
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    #[test]
    fn test_low_market_wins_over_strong_invest() {
        let r = score(&ScoreVector::new(3.0, 10.0, 10.0, 10.0, 0.0));
        assert_eq!(r.recommendation, Recommendation::Avoid);
    }

    #[test]
    fn test_high_risk_avoids_despite_positive_overall() {
        let r = score(&ScoreVector::uniform(10.0));
        assert!(r.overall_score > 0.0);
        assert_eq!(r.recommendation, Recommendation::Avoid);
    }

    #[test]
    fn test_strong_invest_on_team_and_traction() {
        let r = score(&ScoreVector::new(6.0, 6.0, 8.0, 7.0, 2.0));
        assert_eq!(r.recommendation, Recommendation::StrongInvest);
        assert!(r.overall_score < 7.0);
    }

    #[test]
    fn test_invest_on_overall() {
        let r = score(&ScoreVector::new(8.0, 8.0, 8.0, 8.0, 1.0));
        assert!(approx(r.overall_score, 7.45), "got {}", r.overall_score);
        // team 8 and traction 8 also qualify for the stronger label
        assert_eq!(r.recommendation, Recommendation::StrongInvest);

        let r = score(&ScoreVector::new(8.0, 8.0, 7.0, 8.0, 1.0));
        assert!(approx(r.overall_score, 7.25), "got {}", r.overall_score);
        assert_eq!(r.recommendation, Recommendation::Invest);
    }

    #[test]
    fn test_consider_otherwise() {
        let r = score(&ScoreVector::uniform(5.0));
        assert!(approx(r.overall_score, 4.0));
        assert_eq!(r.recommendation, Recommendation::Consider);
    }

    #[test]
    fn test_boundaries_are_inclusive_where_stated() {
        // market exactly 5 is not "< 5"
        let r = score(&ScoreVector::new(5.0, 0.0, 0.0, 0.0, 8.0));
        assert_eq!(r.recommendation, Recommendation::Consider);
        // risk exactly 8 is not "> 8"
        let r = score(&ScoreVector::new(10.0, 10.0, 10.0, 10.0, 8.0));
        assert_eq!(r.recommendation, Recommendation::StrongInvest);
    }

    #[test]
    fn test_overall_extremes_not_clamped() {
        let best = score(&ScoreVector::new(10.0, 10.0, 10.0, 10.0, 0.0));
        assert!(approx(best.overall_score, 9.5));
        let worst = score(&ScoreVector::new(0.0, 0.0, 0.0, 0.0, 10.0));
        assert!(approx(worst.overall_score, -1.5));
        assert_eq!(worst.recommendation, Recommendation::Avoid);
    }

    #[test]
    fn test_overall_rounds_stored_value() {
        // 2.0 + 1.275 sums to 3.27499.., not 3.275
        let r = score(&ScoreVector::new(5.0, 0.0, 0.0, 8.5, 0.0));
        assert_eq!(r.overall_score, 3.27);
    }

    #[test]
    fn test_breakdown_copies_input() {
        let v = ScoreVector::new(7.1, 6.2, 5.3, 4.4, 3.5);
        let r = score(&v);
        assert_eq!(r.breakdown, v);
    }

    #[test]
    fn test_score_is_deterministic() {
        let v = ScoreVector::new(6.7, 3.3, 9.1, 2.5, 4.0);
        assert_eq!(score(&v), score(&v));
    }

    #[test]
    fn test_result_json_shape() {
        let r = score(&ScoreVector::new(6.0, 6.0, 8.0, 7.0, 2.0));
        let json = serde_json::to_value(&r).unwrap();
        assert_eq!(json["recommendation"], "Strong Invest");
        assert_eq!(json["breakdown"]["team"], 8.0);
        assert!(json["overall_score"].is_f64());
    }
}
