mod inject_cname;

pub use inject_cname::{InjectCnameUseCase, CNAME_INJECTOR_STAGE};
