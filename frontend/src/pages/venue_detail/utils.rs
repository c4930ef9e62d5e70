use chrono::NaiveDate;

use crate::{
    domain::slot_time::SlotTime,
    pages::reservation::utils::reservation_path,
    state::session::SessionPhase,
    utils::navigation,
};

pub fn parse_id(raw: &str) -> Option<i64> {
    raw.trim().parse().ok().filter(|id| *id > 0)
}

/// Where "Reservar" leads: the reservation form for the chosen slot, or the
/// login page with that form as the return path.
pub fn reserve_target(phase: &SessionPhase, venue_id: i64, date: NaiveDate, time: SlotTime) -> String {
    let path = reservation_path(venue_id, date, time);
    if phase.is_authenticated() {
        path
    } else {
        navigation::login_url(&path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::helpers::citizen_user;
    use percent_encoding::percent_decode_str;

    fn june(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 6, d).unwrap()
    }

    #[test]
    fn parse_id_accepts_positive_numbers_only() {
        assert_eq!(parse_id("5"), Some(5));
        assert_eq!(parse_id("0"), None);
        assert_eq!(parse_id("-3"), None);
        assert_eq!(parse_id("abc"), None);
    }

    #[test]
    fn signed_in_users_go_straight_to_the_form() {
        let target = reserve_target(
            &SessionPhase::Authenticated(citizen_user()),
            5,
            june(15),
            SlotTime::parse("14:00").unwrap(),
        );
        assert_eq!(target, "/reservar?escenario=5&fecha=2025-06-15&hora=14:00");
    }

    #[test]
    fn anonymous_visitors_resume_the_exact_slot_after_login() {
        let target = reserve_target(
            &SessionPhase::Unauthenticated,
            5,
            june(15),
            SlotTime::parse("14:00").unwrap(),
        );
        let encoded = target
            .strip_prefix("/login?redirect=")
            .expect("login url with redirect");
        let decoded = percent_decode_str(encoded).decode_utf8().unwrap();
        assert_eq!(decoded, "/reservar?escenario=5&fecha=2025-06-15&hora=14:00");
    }
}
