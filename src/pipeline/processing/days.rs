use crate::domain::DayCode;

/// Expands a composite day-code token ("TTH", "MWF") into its days, in order.
///
/// `TH` (any case on the `H`) is consumed as one unit for Thursday before `T`
/// is ever considered alone. Letters outside the table come out as
/// [`DayCode::Unknown`].
pub fn expand_days(token: &str) -> Vec<DayCode> {
    let chars: Vec<char> = token.chars().collect();
    let mut days = Vec::with_capacity(chars.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];
        let next_is_h = chars.get(i + 1).is_some_and(|n| n.eq_ignore_ascii_case(&'H'));
        if c.eq_ignore_ascii_case(&'T') && next_is_h {
            days.push(DayCode::Thursday);
            i += 2;
            continue;
        }
        days.push(single_letter(c));
        i += 1;
    }

    days
}

fn single_letter(c: char) -> DayCode {
    match c.to_ascii_uppercase() {
        'M' => DayCode::Monday,
        'T' => DayCode::Tuesday,
        'W' => DayCode::Wednesday,
        'R' => DayCode::Thursday,
        'F' => DayCode::Friday,
        'S' => DayCode::Saturday,
        'U' => DayCode::Sunday,
        _ => DayCode::Unknown(c),
    }
}
