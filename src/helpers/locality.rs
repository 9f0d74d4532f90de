/// Host component of a base address, without scheme, userinfo, port or path.
///
/// Works on plain strings so it does not depend on a URL parser.
pub fn host_of(address: &str) -> &str {
    let address = address.trim();
    let rest = match address.find("://") {
        Some(idx) => &address[idx + 3..],
        None => address,
    };
    let authority = rest
        .split(|c: char| c == '/' || c == '?' || c == '#')
        .next()
        .unwrap_or_default();
    let host_port = match authority.rfind('@') {
        Some(idx) => &authority[idx + 1..],
        None => authority,
    };

    // [::1]:8080
    if let Some(bracketed) = host_port.strip_prefix('[') {
        return bracketed.split(']').next().unwrap_or_default();
    }
    match host_port.split_once(':') {
        Some((host, _port)) => host,
        None => host_port,
    }
}

/// True when the address points at one of the loopback hosts.
pub fn is_local<S: AsRef<str>>(address: &str, loopback_hosts: &[S]) -> bool {
    let host = host_of(address);
    !host.is_empty()
        && loopback_hosts
            .iter()
            .any(|loopback| loopback.as_ref().eq_ignore_ascii_case(host))
}

/// A repository counts as local when any of its base addresses is.
pub fn any_local<S: AsRef<str>>(addresses: &[String], loopback_hosts: &[S]) -> bool {
    addresses.iter().any(|address| is_local(address, loopback_hosts))
}
