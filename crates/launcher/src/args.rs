//! Argument flattening into the child environment.
//!
//! `NADM_ARGS` is a plain space join: no quoting, no escaping. Arguments that
//! contain spaces split differently on the script side. `Indexed` forwarding
//! adds one variable per argument for scripts that need the exact vector.

use std::ffi::{OsStr, OsString};

use crate::cfg::{ArgForwarding, ARGC_VAR, ARG_VAR_PREFIX};

/// Join `args` with single spaces, preserving order and raw bytes.
pub fn join_args<I, S>(args: I) -> OsString
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let mut joined = OsString::new();
    for (i, arg) in args.into_iter().enumerate() {
        if i > 0 {
            joined.push(" ");
        }
        joined.push(arg.as_ref());
    }
    joined
}

/// Variables added on top of the inherited environment.
///
/// Always `(args_var, joined)`; in `Indexed` mode also the count and each
/// argument under `NADM_ARG_<i>` (1-based, matching `$1..$n`).
pub fn forwarded_env<S: AsRef<OsStr>>(
    args: &[S],
    args_var: &str,
    mode: ArgForwarding,
) -> Vec<(OsString, OsString)> {
    let mut vars = vec![(OsString::from(args_var), join_args(args))];
    if mode == ArgForwarding::Indexed {
        vars.reserve(args.len() + 1);
        vars.push((OsString::from(ARGC_VAR), OsString::from(args.len().to_string())));
        for (i, arg) in args.iter().enumerate() {
            let key = format!("{ARG_VAR_PREFIX}{}", i + 1);
            vars.push((OsString::from(key), arg.as_ref().to_os_string()));
        }
    }
    vars
}

/// Keys of the form `NADM_ARG_<digits>` among `keys`.
///
/// Other variables sharing the prefix (`NADM_ARG_MODE`) are not matched.
pub fn inherited_arg_vars<I>(keys: I) -> Vec<OsString>
where
    I: IntoIterator<Item = OsString>,
{
    keys.into_iter()
        .filter(|key| {
            key.to_str()
                .and_then(|k| k.strip_prefix(ARG_VAR_PREFIX))
                .map_or(false, |idx| !idx.is_empty() && idx.bytes().all(|b| b.is_ascii_digit()))
        })
        .collect()
}
