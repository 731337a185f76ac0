//! Localized month and weekday names.

use taqwim_types::Locale;

use crate::error::CalendarError;

const HIJRI_MONTHS_AR: [&str; 12] = [
    "محرم",
    "صفر",
    "ربيع الأول",
    "ربيع الآخر",
    "جمادى الأولى",
    "جمادى الآخرة",
    "رجب",
    "شعبان",
    "رمضان",
    "شوال",
    "ذو القعدة",
    "ذو الحجة",
];

const HIJRI_MONTHS_EN: [&str; 12] = [
    "Muharram",
    "Safar",
    "Rabi' al-Awwal",
    "Rabi' al-Thani",
    "Jumada al-Ula",
    "Jumada al-Akhirah",
    "Rajab",
    "Sha'ban",
    "Ramadan",
    "Shawwal",
    "Dhu al-Qi'dah",
    "Dhu al-Hijjah",
];

const GREGORIAN_MONTHS_AR: [&str; 12] = [
    "يناير", "فبراير", "مارس", "أبريل", "مايو", "يونيو",
    "يوليو", "أغسطس", "سبتمبر", "أكتوبر", "نوفمبر", "ديسمبر",
];

const GREGORIAN_MONTHS_EN: [&str; 12] = [
    "January", "February", "March", "April", "May", "June",
    "July", "August", "September", "October", "November", "December",
];

// Sunday first.
const WEEKDAYS_AR: [&str; 7] = ["الأحد", "الإثنين", "الثلاثاء", "الأربعاء", "الخميس", "الجمعة", "السبت"];

const WEEKDAYS_EN: [&str; 7] = ["Sunday", "Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday"];

fn month_slot(month: i32) -> Result<usize, CalendarError> {
    if (1..=12).contains(&month) {
        Ok((month - 1) as usize)
    } else {
        Err(CalendarError::InvalidMonthIndex { month: i64::from(month) })
    }
}

/// Returns the Hijri month name (1 = Muharram).
///
/// # Errors
/// Returns `InvalidMonthIndex` if `month` is outside 1-12.
pub fn hijri_month_name(month: i32, locale: Locale) -> Result<&'static str, CalendarError> {
    let slot = month_slot(month)?;
    Ok(match locale {
        Locale::Arabic => HIJRI_MONTHS_AR[slot],
        Locale::English => HIJRI_MONTHS_EN[slot],
    })
}

/// Returns the Gregorian month name (1 = January).
///
/// # Errors
/// Returns `InvalidMonthIndex` if `month` is outside 1-12.
pub fn gregorian_month_name(month: i32, locale: Locale) -> Result<&'static str, CalendarError> {
    let slot = month_slot(month)?;
    Ok(match locale {
        Locale::Arabic => GREGORIAN_MONTHS_AR[slot],
        Locale::English => GREGORIAN_MONTHS_EN[slot],
    })
}

/// Returns the weekday name (0 = Sunday).
///
/// # Errors
/// Returns `InvalidWeekdayIndex` if `weekday` is outside 0-6.
pub fn weekday_name(weekday: i32, locale: Locale) -> Result<&'static str, CalendarError> {
    if !(0..=6).contains(&weekday) {
        return Err(CalendarError::InvalidWeekdayIndex { weekday: i64::from(weekday) });
    }
    let slot = weekday as usize;
    Ok(match locale {
        Locale::Arabic => WEEKDAYS_AR[slot],
        Locale::English => WEEKDAYS_EN[slot],
    })
}
