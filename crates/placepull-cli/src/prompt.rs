//! Interactive prompting for runs launched without criteria flags.

use dialoguer::Input;

use crate::form::FormInput;

/// Collects the four form fields interactively. Every field may be left
/// empty; validation happens in the form state machine, except the radius,
/// which is re-prompted until it is empty or an integer.
pub fn collect_input() -> anyhow::Result<FormInput> {
    let query: String = Input::new()
        .with_prompt("Type of place and location (e.g. restaurants in New York)")
        .allow_empty(true)
        .interact_text()?;

    let latitude: String = Input::new()
        .with_prompt("Latitude [optional]")
        .allow_empty(true)
        .interact_text()?;

    let longitude: String = Input::new()
        .with_prompt("Longitude [optional]")
        .allow_empty(true)
        .interact_text()?;

    let radius_raw: String = Input::new()
        .with_prompt("Radius in meters [optional]")
        .allow_empty(true)
        .validate_with(|value: &String| {
            let trimmed = value.trim();
            if trimmed.is_empty() || trimmed.parse::<u32>().is_ok() {
                Ok(())
            } else {
                Err("radius must be a whole number of meters")
            }
        })
        .interact_text()?;

    Ok(FormInput {
        query,
        latitude,
        longitude,
        radius_m: radius_raw.trim().parse::<u32>().ok(),
    })
}
