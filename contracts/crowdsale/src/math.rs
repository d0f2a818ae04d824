use cosmwasm_std::{OverflowError, Uint128};

use crowdsale_base::crowdsale::{
    state::PRESALE_BONUS_SCHEDULE,
    types::{Config, IcoDates, Phase},
};

/// Resolves the sale phase from the externally supplied block time.
///
/// Finished wins over everything: reaching the max cap closes the sale at
/// any time, a configured ICO window closes it once it elapses with the min
/// cap met, and an elapsed presale window with no ICO configured closes it
/// as well. While both windows are active the ICO takes precedence over
/// the presale.
pub fn calc_phase(
    block_time: u64,
    config: &Config,
    ico_dates: Option<&IcoDates>,
    total_raised: Uint128,
) -> Phase {
    if total_raised >= config.max_cap {
        return Phase::Finished;
    }

    match ico_dates {
        Some(ico) => {
            if block_time >= ico.end {
                if total_raised >= config.min_cap {
                    return Phase::Finished;
                }
            } else if block_time >= ico.start {
                return Phase::Ico;
            }
        }
        None => {
            if block_time >= config.presale_end {
                return Phase::Finished;
            }
        }
    }

    let before_ico = ico_dates.map_or(true, |ico| block_time < ico.start);
    if block_time >= config.presale_start && block_time < config.presale_end && before_ico {
        return Phase::Presale;
    }

    Phase::NotStarted
}

/// Bonus percent for time elapsed since presale start, 0 outside the schedule
pub fn calc_presale_bonus_percent(elapsed: u64) -> u128 {
    PRESALE_BONUS_SCHEDULE
        .iter()
        .find(|(bound, _)| elapsed < *bound)
        .map(|(_, percent)| *percent)
        .unwrap_or_default()
}

/// base_tokens increased by the bonus tier matching the elapsed presale time
pub fn apply_presale_bonus(
    base_tokens: Uint128,
    elapsed: u64,
) -> Result<Uint128, OverflowError> {
    let percent = calc_presale_bonus_percent(elapsed);
    let bonus = base_tokens.checked_mul(Uint128::new(percent))? / Uint128::new(100);

    base_tokens.checked_add(bonus)
}
