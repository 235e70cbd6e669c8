use zonenet_core::format::OutputFormat;

/// A street given on the command line as `FROM:TO` or `FROM:TO:WEIGHT`
#[derive(Debug, Clone, PartialEq)]
pub struct StreetSpec {
    pub from: String,
    pub to: String,
    pub weight: Option<f64>,
}

/// Two zones given as `A:B`
#[derive(Debug, Clone, PartialEq)]
pub struct ZonePair {
    pub a: String,
    pub b: String,
}

/// Parse output format from string
pub fn parse_format(s: &str) -> std::result::Result<OutputFormat, String> {
    s.parse::<OutputFormat>().map_err(|e| e.to_string())
}

fn parse_zone(raw: &str, spec: &str) -> std::result::Result<String, String> {
    let zone = raw.trim();
    if zone.is_empty() {
        return Err(format!("empty zone name in '{}'", spec));
    }
    Ok(zone.to_string())
}

/// Parse a street spec such as `A:B` or `A:B:2.5`
pub fn parse_street(s: &str) -> std::result::Result<StreetSpec, String> {
    let parts: Vec<&str> = s.split(':').collect();
    let (from, to, weight) = match parts.as_slice() {
        [from, to] => (from, to, None),
        [from, to, weight] => (from, to, Some(parse_weight(weight)?)),
        _ => return Err(format!("expected FROM:TO or FROM:TO:WEIGHT, got '{}'", s)),
    };

    Ok(StreetSpec {
        from: parse_zone(from, s)?,
        to: parse_zone(to, s)?,
        weight,
    })
}

/// Parse a zone pair such as `C:D`
pub fn parse_pair(s: &str) -> std::result::Result<ZonePair, String> {
    match s.split(':').collect::<Vec<_>>().as_slice() {
        [a, b] => Ok(ZonePair {
            a: parse_zone(a, s)?,
            b: parse_zone(b, s)?,
        }),
        _ => Err(format!("expected A:B, got '{}'", s)),
    }
}

/// Parse a street weight; negative or non-finite weights are rejected
pub fn parse_weight(s: &str) -> std::result::Result<f64, String> {
    let weight: f64 = s
        .trim()
        .parse()
        .map_err(|_| format!("invalid weight: {}", s))?;
    if !weight.is_finite() || weight < 0.0 {
        return Err(format!("invalid weight: {} (must be a non-negative number)", s));
    }
    Ok(weight)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_street_with_weight() {
        let street = parse_street("A:B:2.5").unwrap();
        assert_eq!(street.from, "A");
        assert_eq!(street.to, "B");
        assert_eq!(street.weight, Some(2.5));
    }

    #[test]
    fn test_parse_street_without_weight() {
        let street = parse_street(" Centro : Norte ").unwrap();
        assert_eq!(street.from, "Centro");
        assert_eq!(street.to, "Norte");
        assert_eq!(street.weight, None);
    }

    #[test]
    fn test_parse_street_rejects_bad_input() {
        assert!(parse_street("A").is_err());
        assert!(parse_street("A:B:C:D").is_err());
        assert!(parse_street(":B").is_err());
        assert!(parse_street("A:B:heavy").is_err());
        assert!(parse_street("A:B:-1").is_err());
        assert!(parse_street("A:B:inf").is_err());
    }

    #[test]
    fn test_parse_pair() {
        assert_eq!(
            parse_pair("C:D").unwrap(),
            ZonePair {
                a: "C".to_string(),
                b: "D".to_string()
            }
        );
        assert!(parse_pair("C").is_err());
        assert!(parse_pair("C:D:1").is_err());
    }

    #[test]
    fn test_parse_format() {
        assert_eq!(parse_format("json").unwrap(), OutputFormat::Json);
        assert!(parse_format("records").is_err());
    }
}
