//! Lower-level types and re-exports.
//!
//! Most users will not have to interact with the types in this module, but it is useful for those
//! matching requests without the [`Router`](crate::Router) service or writing their own codecs
//! and matchers.

pub use wayfinder_router::{
    Captures, MethodMatcher, Params, ParamsIter, Routable, RouteId, RouteInput,
    Router as PatternRouter, RouterBuilder as PatternRouterBuilder, Segment, SegmentExtractor,
    SegmentKind, SegmentRegex,
};
pub use wayfinder_task::{
    AndThen, ErrInto, Fail, FnTask, FromResult, Instrument, Lazy, Map, MapErr, OrElse, Ready,
    Sequence, Then, Zip,
};
