//! Declared release versions
//!
//! Every release the platform knows about is listed here together with the
//! companion format version it shipped with. [`DECLARED_VERSIONS`] is the
//! table the process-wide registry is built from; a new release needs a
//! constant and an entry in that table.

use crate::companion::*;
use crate::version::Version;

/// Id of the sentinel "no version configured" value
pub const V_EMPTY_ID: i32 = 0;
/// Sentinel for "no version configured"; never part of the registry
pub const V_EMPTY: Version = Version::declare(V_EMPTY_ID, CompanionVersion::LATEST);

pub const V_6_0_0_ALPHA1: Version = Version::declare(6_000_001, LUCENE_7_0_0);
pub const V_6_0_0_ALPHA2: Version = Version::declare(6_000_002, LUCENE_7_0_0);
pub const V_6_0_0_BETA1: Version = Version::declare(6_000_026, LUCENE_7_0_0);
pub const V_6_0_0_BETA2: Version = Version::declare(6_000_027, LUCENE_7_0_0);
pub const V_6_0_0_RC1: Version = Version::declare(6_000_051, LUCENE_7_0_0);
pub const V_6_0_0_RC2: Version = Version::declare(6_000_052, LUCENE_7_0_1);
pub const V_6_0_0: Version = Version::declare(6_000_099, LUCENE_7_0_1);
pub const V_6_0_1: Version = Version::declare(6_000_199, LUCENE_7_0_1);
pub const V_6_1_0: Version = Version::declare(6_010_099, LUCENE_7_1_0);
pub const V_6_1_1: Version = Version::declare(6_010_199, LUCENE_7_1_0);
pub const V_6_1_2: Version = Version::declare(6_010_299, LUCENE_7_1_0);
pub const V_6_1_3: Version = Version::declare(6_010_399, LUCENE_7_1_0);
pub const V_6_1_4: Version = Version::declare(6_010_499, LUCENE_7_1_0);
pub const V_6_2_0: Version = Version::declare(6_020_099, LUCENE_7_2_1);
pub const V_6_2_1: Version = Version::declare(6_020_199, LUCENE_7_2_1);
pub const V_6_2_2: Version = Version::declare(6_020_299, LUCENE_7_2_1);
pub const V_6_2_3: Version = Version::declare(6_020_399, LUCENE_7_2_1);
pub const V_6_2_4: Version = Version::declare(6_020_499, LUCENE_7_2_1);
pub const V_6_3_0: Version = Version::declare(6_030_099, LUCENE_7_3_1);
pub const V_6_3_1: Version = Version::declare(6_030_199, LUCENE_7_3_1);
pub const V_6_3_2: Version = Version::declare(6_030_299, LUCENE_7_3_1);
pub const V_6_4_0: Version = Version::declare(6_040_099, LUCENE_7_4_0);
pub const V_6_4_1: Version = Version::declare(6_040_199, LUCENE_7_4_0);
pub const V_6_4_2: Version = Version::declare(6_040_299, LUCENE_7_4_0);
pub const V_6_4_3: Version = Version::declare(6_040_399, LUCENE_7_4_0);
pub const V_6_5_0: Version = Version::declare(6_050_099, LUCENE_7_5_0);
pub const V_6_5_1: Version = Version::declare(6_050_199, LUCENE_7_5_0);
pub const V_6_5_2: Version = Version::declare(6_050_299, LUCENE_7_5_0);
pub const V_6_5_3: Version = Version::declare(6_050_399, LUCENE_7_5_0);
pub const V_6_5_4: Version = Version::declare(6_050_499, LUCENE_7_5_0);
pub const V_6_6_0: Version = Version::declare(6_060_099, LUCENE_7_6_0);
pub const V_6_6_1: Version = Version::declare(6_060_199, LUCENE_7_6_0);
pub const V_6_6_2: Version = Version::declare(6_060_299, LUCENE_7_6_0);
pub const V_6_7_0: Version = Version::declare(6_070_099, LUCENE_7_7_0);
pub const V_6_7_1: Version = Version::declare(6_070_199, LUCENE_7_7_0);
pub const V_6_7_2: Version = Version::declare(6_070_299, LUCENE_7_7_0);
pub const V_6_7_3: Version = Version::declare(6_070_399, LUCENE_7_7_0);
pub const V_7_0_0: Version = Version::declare(7_000_099, LUCENE_8_0_0);
pub const V_7_0_1: Version = Version::declare(7_000_199, LUCENE_8_0_0);
pub const V_7_0_2: Version = Version::declare(7_000_299, LUCENE_8_0_0);

/// Version of the running process
pub const CURRENT: Version = V_7_0_2;

const _: () = assert!(
    CURRENT.companion().same_as(&CompanionVersion::LATEST),
    "the current version must ship with the latest companion version"
);

/// All declared versions, in declaration order
pub const DECLARED_VERSIONS: &[Version] = &[
    V_6_0_0_ALPHA1,
    V_6_0_0_ALPHA2,
    V_6_0_0_BETA1,
    V_6_0_0_BETA2,
    V_6_0_0_RC1,
    V_6_0_0_RC2,
    V_6_0_0,
    V_6_0_1,
    V_6_1_0,
    V_6_1_1,
    V_6_1_2,
    V_6_1_3,
    V_6_1_4,
    V_6_2_0,
    V_6_2_1,
    V_6_2_2,
    V_6_2_3,
    V_6_2_4,
    V_6_3_0,
    V_6_3_1,
    V_6_3_2,
    V_6_4_0,
    V_6_4_1,
    V_6_4_2,
    V_6_4_3,
    V_6_5_0,
    V_6_5_1,
    V_6_5_2,
    V_6_5_3,
    V_6_5_4,
    V_6_6_0,
    V_6_6_1,
    V_6_6_2,
    V_6_7_0,
    V_6_7_1,
    V_6_7_2,
    V_6_7_3,
    V_7_0_0,
    V_7_0_1,
    V_7_0_2,
];
