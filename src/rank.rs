//! Sort flare records from most to least intense.

use crate::{
    errors::FlareRankErr,
    event::GoesClassified,
    magnitude::{compute_magnitude, FlareMagnitude},
};
use log::{debug, warn};

/// What to do with a record whose class string does not parse.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RankPolicy {
    /// Fail the whole ranking on the first bad record.
    Strict,
    /// Keep bad records, unranked, after every record that parsed.
    Lenient,
}

/// A record paired with the magnitude it was sorted by.
///
/// `magnitude` is `None` for a record that was kept under [`RankPolicy::Lenient`] even though
/// its class did not parse. `None` sorts below every magnitude.
#[allow(missing_docs)]
#[derive(Debug, Clone, PartialEq)]
pub struct Ranked<T> {
    pub magnitude: Option<FlareMagnitude>,
    pub record: T,
}

/// Order records by descending magnitude.
///
/// The sort is stable, records with equal magnitude stay in their input order. The output is
/// a permutation of the input unless the policy is strict and a class fails to parse, in which
/// case nothing is returned but the error.
pub fn rank<T, I>(records: I, policy: RankPolicy) -> Result<Vec<T>, FlareRankErr>
where
    T: GoesClassified,
    I: IntoIterator<Item = T>,
{
    Ok(rank_with_magnitudes(records, policy)?
        .into_iter()
        .map(|ranked| ranked.record)
        .collect())
}

/// Same as [`rank`], but keep the magnitude computed for each record.
pub fn rank_with_magnitudes<T, I>(
    records: I,
    policy: RankPolicy,
) -> Result<Vec<Ranked<T>>, FlareRankErr>
where
    T: GoesClassified,
    I: IntoIterator<Item = T>,
{
    let mut ranked = records
        .into_iter()
        .map(|record| match compute_magnitude(record.goes_class()) {
            Ok(magnitude) => Ok(Ranked {
                magnitude: Some(magnitude),
                record,
            }),
            Err(err) if policy == RankPolicy::Lenient => {
                warn!("ranking record last: {}", err);
                Ok(Ranked {
                    magnitude: None,
                    record,
                })
            }
            Err(err) => Err(err),
        })
        .collect::<Result<Vec<_>, _>>()?;

    // slice::sort_by is stable, so ties keep input order.
    ranked.sort_by(|a, b| b.magnitude.cmp(&a.magnitude));

    debug!("ranked {} records", ranked.len());

    Ok(ranked)
}

/*--------------------------------------------------------------------------------------------------
                                          Unit Tests
--------------------------------------------------------------------------------------------------*/
