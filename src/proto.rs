//! Hand-maintained protobuf messages for the event-file wire format.
//!
//! These structs mirror the wire layout of TensorFlow's `Event`, `Summary`
//! and `HistogramProto` messages. Field numbers and scalar types are pinned:
//! changing any of them breaks compatibility with every reader of the
//! format. Only the fields this crate emits are declared; unknown fields on
//! the wire side are simply never produced.

/// One timestamped record in an event file.
///
/// The very first record of a file carries `file_version` instead of a
/// summary and acts as a format-version declaration.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Event {
    /// Wall-clock time in float seconds since the Unix epoch.
    #[prost(double, tag = "1")]
    pub wall_time: f64,
    /// Global step of the record; 0 when the caller supplied none.
    #[prost(int64, tag = "2")]
    pub step: i64,
    #[prost(oneof = "event::What", tags = "3, 5")]
    pub what: ::core::option::Option<event::What>,
}
/// Nested message and enum types in `Event`.
pub mod event {
    #[derive(Clone, PartialEq, ::prost::Oneof)]
    pub enum What {
        #[prost(string, tag = "3")]
        FileVersion(::prost::alloc::string::String),
        #[prost(message, tag = "5")]
        Summary(super::Summary),
    }
}

/// A set of tagged values logged at one step.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct Summary {
    #[prost(message, repeated, tag = "1")]
    pub value: ::prost::alloc::vec::Vec<summary::Value>,
}
/// Nested message and enum types in `Summary`.
pub mod summary {
    /// One losslessly encoded image with its pixel dimensions.
    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Image {
        #[prost(int32, tag = "1")]
        pub height: i32,
        #[prost(int32, tag = "2")]
        pub width: i32,
        /// 1 = grayscale, 2 = grayscale + alpha, 3 = RGB, 4 = RGBA.
        #[prost(int32, tag = "3")]
        pub colorspace: i32,
        #[prost(bytes = "vec", tag = "4")]
        pub encoded_image_string: ::prost::alloc::vec::Vec<u8>,
    }

    #[derive(Clone, PartialEq, ::prost::Message)]
    pub struct Value {
        #[prost(string, tag = "1")]
        pub tag: ::prost::alloc::string::String,
        #[prost(oneof = "value::Value", tags = "2, 4, 5")]
        pub value: ::core::option::Option<value::Value>,
    }
    /// Nested message and enum types in `Value`.
    pub mod value {
        #[derive(Clone, PartialEq, ::prost::Oneof)]
        pub enum Value {
            #[prost(float, tag = "2")]
            SimpleValue(f32),
            #[prost(message, tag = "4")]
            Image(super::Image),
            #[prost(message, tag = "5")]
            Histo(super::super::HistogramProto),
        }
    }
}

/// Summary statistics plus bucketed counts for a logged distribution.
///
/// `bucket_limit[i]` is the inclusive upper edge of bucket `i`;
/// `bucket[i]` is that bucket's count. Both are doubles on the wire.
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct HistogramProto {
    #[prost(double, tag = "1")]
    pub min: f64,
    #[prost(double, tag = "2")]
    pub max: f64,
    #[prost(double, tag = "3")]
    pub num: f64,
    #[prost(double, tag = "4")]
    pub sum: f64,
    #[prost(double, tag = "5")]
    pub sum_squares: f64,
    #[prost(double, repeated, tag = "6")]
    pub bucket_limit: ::prost::alloc::vec::Vec<f64>,
    #[prost(double, repeated, tag = "7")]
    pub bucket: ::prost::alloc::vec::Vec<f64>,
}
