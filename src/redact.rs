//! Credential masking for connection strings headed to log output

const MASK: &str = "***";
const PASSWORD_KEY: &str = "password=";

/// Mask the passwords embedded in a connection string
///
/// Two shapes are recognised: a `password=` parameter (in a query string or a
/// space separated keyword list) and the `user:password@` part of a URL
/// authority. Anything else passes through untouched, so this is safe to call
/// on arbitrary descriptors. A path segment holding both `:` and `@` before
/// the query is masked as if it were userinfo; over-masking is preferred to
/// leaking a password containing `/`.
///
/// ```
/// use dbapi::redact;
///
/// assert_eq!(
///     redact("jdbc:mariadb://db:3306/app?user=root&password=secret"),
///     "jdbc:mariadb://db:3306/app?user=root&password=***"
/// );
/// assert_eq!(
///     redact("postgres://app:secret@db:5432/app"),
///     "postgres://app:***@db:5432/app"
/// );
/// ```
#[must_use]
pub fn redact(descriptor: &str) -> String {
    let masked = mask_userinfo(descriptor);
    mask_password_params(&masked)
}

fn mask_userinfo(descriptor: &str) -> String {
    let Some(scheme_end) = descriptor.find("://") else {
        return descriptor.to_string();
    };
    let authority_start = scheme_end + 3;
    let rest = &descriptor[authority_start..];
    // Raw passwords may contain '/', so the userinfo search runs up to the query
    let search_len = rest.find(['?', '#']).unwrap_or(rest.len());

    let Some(at) = rest[..search_len].rfind('@') else {
        return descriptor.to_string();
    };
    let Some(colon) = rest[..at].find(':') else {
        return descriptor.to_string();
    };
    if rest[..colon].contains('/') {
        return descriptor.to_string();
    }

    let mut out = String::with_capacity(descriptor.len());
    out.push_str(&descriptor[..=authority_start + colon]);
    out.push_str(MASK);
    out.push_str(&descriptor[authority_start + at..]);
    out
}

fn mask_password_params(descriptor: &str) -> String {
    // ASCII lowercasing keeps byte offsets identical to the original
    let lower = descriptor.to_ascii_lowercase();
    let bytes = descriptor.as_bytes();
    let mut out = String::with_capacity(descriptor.len());
    let mut cursor = 0;
    let mut search = 0;

    while let Some(found) = lower[search..].find(PASSWORD_KEY) {
        let key_start = search + found;
        let value_start = key_start + PASSWORD_KEY.len();
        let preceding = if key_start == 0 {
            None
        } else {
            Some(bytes[key_start - 1])
        };
        // Query values may hold spaces; keyword list values end at whitespace
        let terminators: &[char] = match preceding {
            Some(b'?' | b'&' | b';') => &['&', ';', '#'],
            None | Some(b' ' | b'\t') => &['&', ';', ' ', '\t'],
            Some(_) => {
                search = value_start;
                continue;
            }
        };

        let value_end = descriptor[value_start..]
            .find(terminators)
            .map_or(descriptor.len(), |offset| value_start + offset);

        out.push_str(&descriptor[cursor..value_start]);
        out.push_str(MASK);
        cursor = value_end;
        search = value_end;
    }

    out.push_str(&descriptor[cursor..]);
    out
}
