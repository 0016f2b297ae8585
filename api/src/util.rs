//! Pure helpers over API data: names, ids, generations.

/// Turn an API slug into display form: "mr-mime" -> "Mr Mime".
pub fn display_name(name: &str) -> String {
    name.split('-')
        .filter(|part| !part.is_empty())
        .map(|part| {
            let mut chars = part.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect::<String>(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Extract the trailing numeric id from a resource URL
/// (".../pokemon/25/" -> 25). Returns `None` for malformed URLs.
pub fn id_from_url(url: &str) -> Option<u32> {
    url.trim_end_matches('/').rsplit('/').next()?.parse().ok()
}

/// Which generation a National Dex number belongs to (1..=9).
pub fn generation_of(id: u32) -> u8 {
    match id {
        0..=151 => 1,
        152..=251 => 2,
        252..=386 => 3,
        387..=493 => 4,
        494..=649 => 5,
        650..=721 => 6,
        722..=809 => 7,
        810..=905 => 8,
        _ => 9,
    }
}
