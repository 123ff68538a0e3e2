mod feature;
mod map_result;
mod map_target;

#[doc(inline)]
pub use feature::Feature;
#[doc(inline)]
pub use feature::FeatureIndex;
#[doc(inline)]
pub use map_result::MapResult;
#[doc(inline)]
pub use map_target::ExclusionRule;
#[doc(inline)]
pub use map_target::MapTarget;
