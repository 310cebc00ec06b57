use clap::Args;
use folio_contact::FormFields;

pub mod submit;
pub mod validate;

/// Values typed into the contact form
#[derive(Args, Debug, Clone, Default)]
pub struct FieldArgs {
    /// First name ("Your Name")
    #[arg(long, default_value = "")]
    pub first_name: String,

    /// Last name
    #[arg(long, default_value = "")]
    pub last_name: String,

    /// Email address
    #[arg(long, default_value = "")]
    pub email: String,

    /// Message body
    #[arg(long, default_value = "")]
    pub message: String,
}

impl From<FieldArgs> for FormFields {
    fn from(args: FieldArgs) -> Self {
        FormFields::new(args.first_name, args.last_name, args.email, args.message)
    }
}
