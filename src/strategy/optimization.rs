// src/strategy/optimization.rs

//! Closed-form inventory formulas shared by the order-quantity strategies.
//!
//! Every function here is a direct formula evaluation. None of them validate
//! their inputs: a zero or negative holding cost, or a zero demand, yields
//! `NaN`/`inf` exactly as the arithmetic dictates.

/// Days in the planning year used for cadence and reorder-point figures.
pub const DAYS_PER_YEAR: f64 = 365.0;

/// Months per year, used to annualize monthly holding costs.
pub const MONTHS_PER_YEAR: f64 = 12.0;

/// Calculates the Economic Order Quantity.
///
/// Formula: Q* = sqrt(2 * D * S / H)
///
/// # Arguments
/// * `annual_demand` - Units demanded per year (D).
/// * `order_cost` - Cost incurred per order placed (S).
/// * `holding_cost` - Cost of holding one unit for one year (H).
pub fn economic_order_quantity(annual_demand: f64, order_cost: f64, holding_cost: f64) -> f64 {
    ((2.0 * annual_demand * order_cost) / holding_cost).sqrt()
}

/// Fraction of the holding cost that applies while production runs
/// concurrently with consumption.
///
/// Formula: 1 - D / R
///
/// An absent (or zero) production rate is read as an infinitely fast
/// supplier, so the factor collapses to `1`.
pub fn utilization_factor(annual_demand: f64, production_rate: Option<f64>) -> f64 {
    let rate = match production_rate {
        Some(rate) if rate != 0.0 && !rate.is_nan() => rate,
        _ => f64::INFINITY,
    };
    1.0 - annual_demand / rate
}

/// Calculates the Economic Production Quantity.
///
/// Formula: Q* = sqrt(2 * D * K / (H * (1 - D/R)))
pub fn economic_production_quantity(
    annual_demand: f64,
    setup_cost: f64,
    holding_cost: f64,
    production_rate: f64,
) -> f64 {
    ((2.0 * annual_demand * setup_cost)
        / (holding_cost * (1.0 - annual_demand / production_rate)))
        .sqrt()
}

/// Total annual cost in the purchase-first grouping.
///
/// Formula: TC = D * C + (D / Q) * S + (Q / 2) * H
///
/// This is the form used by the basic and quantity-discount strategies.
pub fn purchase_first_total_cost(
    annual_demand: f64,
    unit_price: f64,
    order_cost: f64,
    holding_cost: f64,
    quantity: f64,
) -> f64 {
    annual_demand * unit_price
        + (annual_demand / quantity) * order_cost
        + (quantity / 2.0) * holding_cost
}

/// Total annual cost for a production run.
///
/// Formula: TC = D * C + (D / Q) * K + (Q / 2) * H * utilization
pub fn production_total_cost(
    annual_demand: f64,
    unit_price: f64,
    setup_cost: f64,
    holding_cost: f64,
    quantity: f64,
    utilization: f64,
) -> f64 {
    annual_demand * unit_price
        + (annual_demand / quantity) * setup_cost
        + (quantity / 2.0) * holding_cost * utilization
}

/// Total annual cost in the classic three-term grouping.
///
/// Formula: TC = K * D / Q + p * D + h * Q / 2
///
/// Numerically equal to [`purchase_first_total_cost`] up to rounding, but
/// evaluated in a different order. The inflation projector relies on this
/// exact grouping.
pub fn classic_total_cost(
    annual_demand: f64,
    unit_price: f64,
    order_cost: f64,
    holding_cost: f64,
    quantity: f64,
) -> f64 {
    (order_cost * annual_demand) / quantity
        + unit_price * annual_demand
        + (holding_cost * quantity) / 2.0
}

/// Annual ordering cost component: S * D / Q
pub fn annual_ordering_cost(annual_demand: f64, order_cost: f64, quantity: f64) -> f64 {
    (order_cost * annual_demand) / quantity
}

/// Annual holding cost component: H * Q / 2
pub fn annual_holding_cost(holding_cost: f64, quantity: f64) -> f64 {
    (holding_cost * quantity) / 2.0
}

/// Average daily demand: D / 365
pub fn daily_demand(annual_demand: f64) -> f64 {
    annual_demand / DAYS_PER_YEAR
}

/// Inventory level at which a replenishment order must be placed so that it
/// arrives before stock runs out.
pub fn reorder_point(annual_demand: f64, lead_time_days: f64) -> f64 {
    daily_demand(annual_demand) * lead_time_days
}

/// Converts a monthly per-unit holding cost into the annual figure the
/// formulas expect.
pub fn annualize_monthly_holding_cost(monthly_holding_cost: f64) -> f64 {
    monthly_holding_cost * MONTHS_PER_YEAR
}
