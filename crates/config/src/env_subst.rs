/// Replace `${ENV_VAR}` placeholders with environment values.
///
/// Unset variables and unterminated placeholders are left as written.
pub fn substitute_env(input: &str) -> String {
    substitute_env_with(input, |name| std::env::var(name).ok())
}

fn substitute_env_with(input: &str, lookup: impl Fn(&str) -> Option<String>) -> String {
    let mut out = String::with_capacity(input.len());
    let mut rest = input;

    while let Some(start) = rest.find("${") {
        out.push_str(&rest[..start]);
        let after = &rest[start + 2..];

        let Some(end) = after.find('}') else {
            out.push_str(&rest[start..]);
            return out;
        };

        let name = &after[..end];
        match lookup(name).filter(|_| !name.is_empty()) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&rest[start..start + 2 + end + 1]),
        }
        rest = &after[end + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup(name: &str) -> Option<String> {
        match name {
            "RTM_BOT_UID" => Some("=bxcNg".to_string()),
            "EMPTY" => Some(String::new()),
            _ => None,
        }
    }

    #[test]
    fn substitutes_known_var() {
        assert_eq!(
            substitute_env_with("uid = \"${RTM_BOT_UID}\"", lookup),
            "uid = \"=bxcNg\""
        );
    }

    #[test]
    fn substitutes_repeatedly() {
        assert_eq!(
            substitute_env_with("${RTM_BOT_UID}/${EMPTY}/${RTM_BOT_UID}", lookup),
            "=bxcNg//=bxcNg"
        );
    }

    #[test]
    fn leaves_unknown_var() {
        assert_eq!(substitute_env_with("${RTM_NOPE}", lookup), "${RTM_NOPE}");
        assert_eq!(substitute_env_with("${}", lookup), "${}");
    }

    #[test]
    fn leaves_unterminated_placeholder() {
        assert_eq!(substitute_env_with("a ${RTM_BOT_UID", lookup), "a ${RTM_BOT_UID");
    }

    #[test]
    fn no_placeholders() {
        assert_eq!(substitute_env("plain $text {}"), "plain $text {}");
    }
}
