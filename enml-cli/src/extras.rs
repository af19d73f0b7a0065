//! `--extra-<key> [value]` pass-through parameters.
//!
//! clap never sees these: they are stripped from the argument list before parsing and
//! handed to the target format as a key/value map. A key without a value is a boolean
//! flag set to `"true"`.

use std::collections::HashMap;

/// Split `--extra-*` arguments out of `args`.
///
/// Returns the remaining arguments and the extra parameters with the `extra-` prefix
/// removed. `--extras-<key>` is accepted as an alias.
pub fn parse_extra_args(args: &[String]) -> (Vec<String>, HashMap<String, String>) {
    let mut cleaned_args = Vec::new();
    let mut extra_params = HashMap::new();
    let mut i = 0;

    while i < args.len() {
        let arg = &args[i];

        let key_opt = arg
            .strip_prefix("--extra-")
            .or_else(|| arg.strip_prefix("--extras-"));

        if let Some(key) = key_opt {
            let has_value = args
                .get(i + 1)
                .is_some_and(|next| !next.starts_with('-'));

            if has_value {
                extra_params.insert(key.to_string(), args[i + 1].clone());
                i += 2;
            } else {
                extra_params.insert(key.to_string(), "true".to_string());
                i += 1;
            }
            continue;
        }

        cleaned_args.push(arg.clone());
        i += 1;
    }

    (cleaned_args, extra_params)
}

/// Remove the first of `keys` present in `map` and return its value.
pub fn take_override(map: &mut HashMap<String, String>, keys: &[&str]) -> Option<String> {
    keys.iter().find_map(|key| map.remove(*key))
}

pub fn parse_bool_arg(flag: &str, raw: &str) -> Result<bool, String> {
    match raw.to_lowercase().as_str() {
        "true" | "1" | "yes" | "y" => Ok(true),
        "false" | "0" | "no" | "n" => Ok(false),
        other => Err(format!(
            "Invalid boolean value '{other}' for --extra-{flag}"
        )),
    }
}
