pub mod cname;

pub use cname::{InjectCnameUseCase, CNAME_INJECTOR_STAGE};
