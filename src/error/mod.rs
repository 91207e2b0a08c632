mod business_error;
mod client_error;
mod submit_error;

pub use business_error::BizErrorEnum;
pub use client_error::ClientError;
pub use submit_error::SubmitContactFormError;

pub fn error_chain_fmt(
    e: &impl std::error::Error,
    f: &mut std::fmt::Formatter<'_>,
) -> std::fmt::Result {
    writeln!(f, "{}\n", e)?;
    let mut current = e.source();
    while let Some(cause) = current {
        writeln!(f, "Caused by: \n\t{}", cause)?;
        current = cause.source();
    }
    Ok(())
}
