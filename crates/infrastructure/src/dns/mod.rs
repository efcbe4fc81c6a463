pub mod codec;
pub mod names;
pub mod record_type_map;
pub mod upstream;

pub use codec::HickoryMessageCodec;
pub use names::to_ascii_domain;
pub use record_type_map::RecordTypeMapper;
pub use upstream::UdpForwarder;
