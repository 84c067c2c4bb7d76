//! Executor strategies
//!
//! Each executor is a pure function from endpoints and exclusions to the
//! invocations it would run. Nothing here launches a process.

use crate::config::{EngineConfig, BIDIRECTIONAL_FLAGS, ONE_WAY_FLAGS};
use crate::domain::entities::Invocation;
use crate::domain::value_objects::{Endpoint, ExclusionSet, Side};

/// One run of the two-way engine over both endpoints.
///
/// Endpoints are passed as written, since unison understands the URL dialect;
/// only a leading `-` is neutralised. With a preference, conflicts unison
/// cannot settle go to that side's root.
pub fn bidirectional(
    config: &EngineConfig,
    left: &Endpoint,
    right: &Endpoint,
    exclusions: &ExclusionSet,
    prefer: Option<Side>,
) -> Invocation {
    let left = left.as_positional();
    let right = right.as_positional();
    let mut builder = Invocation::builder(&config.bidirectional)
        .arg(left.as_str())
        .arg(right.as_str())
        .args(BIDIRECTIONAL_FLAGS.iter().copied())
        .fragments(&exclusions.path_fragments());

    if let Some(side) = prefer {
        let root = match side {
            Side::Left => &left,
            Side::Right => &right,
        };
        builder = builder.arg("-prefer").arg(root.as_str());
    }

    builder.build()
}

/// One mirroring copy from `src` to `dst`.
///
/// Both endpoints are translated to the colon dialect, and the source always
/// gets a trailing separator so only its contents are copied.
pub fn one_way(
    config: &EngineConfig,
    src: &Endpoint,
    dst: &Endpoint,
    exclusions: &ExclusionSet,
) -> Invocation {
    Invocation::builder(&config.one_way)
        .args(ONE_WAY_FLAGS.iter().copied())
        .fragments(&exclusions.glob_fragments())
        .arg(src.to_colon_form().as_positional().as_contents_source())
        .arg(dst.to_colon_form().as_positional().as_str())
        .build()
}

/// Two one-way copies approximating a two-way sync: right to left, then
/// left to right.
///
/// Not a merge. A file changed on both sides keeps the left version, since
/// the push runs last.
pub fn mirror(
    config: &EngineConfig,
    left: &Endpoint,
    right: &Endpoint,
    exclusions: &ExclusionSet,
) -> [Invocation; 2] {
    [
        one_way(config, right, left, exclusions),
        one_way(config, left, right, exclusions),
    ]
}
