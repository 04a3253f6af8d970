use super::RosterImportError;
use crate::workflows::eligibility::{Session, Shooter, ShooterId};
use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use roxmltree::{Document, Node, ParsingOptions};

const DATE_FORMATS: &[&str] = &["%Y-%m-%d", "%d.%m.%Y", "%Y%m%d", "%d/%m/%Y"];
const TIME_FORMATS: &[&str] = &["%H:%M:%S", "%H:%M:%S%.f", "%H:%M"];

pub(crate) fn parse_shooters(xml: &str) -> Result<Vec<Shooter>, RosterImportError> {
    let mut options = ParsingOptions::default();
    options.allow_dtd = true;
    let document = Document::parse_with_options(xml.trim_start_matches('\u{feff}'), options)?;

    document
        .descendants()
        .filter(|node| node.has_tag_name("shooter"))
        .map(parse_shooter)
        .collect()
}

fn parse_shooter(node: Node<'_, '_>) -> Result<Shooter, RosterImportError> {
    let id = required(node, "shooter", "idShooters")?.to_string();
    let birth_raw = required(node, "shooter", "birthdateiso")?;
    let birth_date = NaiveDate::parse_from_str(birth_raw.trim(), "%Y%m%d")
        .map_err(|_| invalid(&id, "birthdateiso", birth_raw))?;
    let best_divider = optional_number::<f64>(node, "bester_teiler", &id)?;

    let sessions = node
        .descendants()
        .filter(|child| child.has_tag_name("series"))
        .map(|series| parse_series(series, &id))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Shooter {
        last_name: required(node, "shooter", "lastname")?.to_string(),
        first_name: required(node, "shooter", "firstname")?.to_string(),
        category: node.attribute("clubsname").unwrap_or_default().to_string(),
        membership: required(node, "shooter", "identification")?.to_string(),
        id: ShooterId(id),
        birth_date,
        best_divider,
        sessions,
    })
}

fn parse_series(node: Node<'_, '_>, shooter_id: &str) -> Result<Session, RosterImportError> {
    let shots = node
        .descendants()
        .filter(|child| child.has_tag_name("shot"))
        .map(|shot| {
            let raw = required(shot, "shot", "datetime")?;
            parse_timestamp(raw).ok_or_else(|| invalid(shooter_id, "datetime", raw))
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Session {
        score: optional_number::<u32>(node, "totalscore", shooter_id)?,
        best_divider: optional_number::<f64>(node, "bester_teiler", shooter_id)?,
        shots,
    })
}

fn required<'a>(
    node: Node<'a, '_>,
    element: &'static str,
    attribute: &'static str,
) -> Result<&'a str, RosterImportError> {
    node.attribute(attribute)
        .ok_or(RosterImportError::MissingAttribute { element, attribute })
}

fn optional_number<T: std::str::FromStr>(
    node: Node<'_, '_>,
    attribute: &'static str,
    shooter_id: &str,
) -> Result<Option<T>, RosterImportError> {
    match node.attribute(attribute) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|_| invalid(shooter_id, attribute, raw)),
    }
}

fn invalid(shooter_id: &str, attribute: &'static str, value: &str) -> RosterImportError {
    RosterImportError::InvalidValue {
        shooter_id: shooter_id.to_string(),
        attribute,
        value: value.to_string(),
    }
}

/// Accepts `<date> [<time>]` as well as `<date>T<time>`.
fn parse_timestamp(raw: &str) -> Option<NaiveDateTime> {
    let mut tokens = raw.split_whitespace();
    let first = tokens.next()?;
    let (date_part, time_part) = match first.split_once('T') {
        Some((date, time)) => (date, Some(time)),
        None => (first, tokens.next()),
    };

    let date = DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(date_part, format).ok())?;
    let time = match time_part {
        Some(raw_time) => TIME_FORMATS
            .iter()
            .find_map(|format| NaiveTime::parse_from_str(raw_time, format).ok())?,
        None => NaiveTime::MIN,
    };

    Some(date.and_time(time))
}

#[cfg(test)]
pub(crate) fn parse_timestamp_for_tests(raw: &str) -> Option<NaiveDateTime> {
    parse_timestamp(raw)
}
