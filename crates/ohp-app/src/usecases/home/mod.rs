mod load_signed_in_phone;

pub use load_signed_in_phone::LoadSignedInPhone;
