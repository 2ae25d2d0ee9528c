//! Random value generators, one per supported value representation.
//!
//! Every generator draws from an explicit random source and returns a fresh value on each
//! call. Formats follow DICOM PS3.5 section 6.2 loosely: values are syntactically valid for
//! their VR, but dates are not checked against the calendar (a generated date may be the
//! 30th of February).

use filldcm_types::{SexHint, TagValue, TypeTag};
use rand::distributions::Alphanumeric;
use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

/// Signature shared by every entry of the generator table.
pub type Generator = fn(&mut dyn RngCore, Option<SexHint>) -> TagValue;

pub(crate) const FIRST_NAMES_MALE: [&str; 56] = [
    "James", "Robert", "John", "Michael", "David", "William", "Richard", "Joseph", "Thomas",
    "Charles", "Christopher", "Daniel", "Matthew", "Anthony", "Mark", "Donald", "Steven", "Paul",
    "Andrew", "Joshua", "Kenneth", "Kevin", "Brian", "George", "Timothy", "Ronald", "Edward",
    "Jason", "Jeffrey", "Ryan", "Jacob", "Gary", "Nicholas", "Eric", "Jonathan", "Stephen",
    "Larry", "Justin", "Scott", "Brandon", "Benjamin", "Samuel", "Gregory", "Alexander", "Frank",
    "Patrick", "Raymond", "Jack", "Dennis", "Jerry", "Tyler", "Aaron", "Jose", "Adam", "Nathan",
    "Henry",
];

pub(crate) const FIRST_NAMES_FEMALE: [&str; 56] = [
    "Mary", "Patricia", "Jennifer", "Linda", "Elizabeth", "Barbara", "Susan", "Jessica", "Sarah",
    "Karen", "Lisa", "Nancy", "Betty", "Margaret", "Sandra", "Ashley", "Kimberly", "Emily",
    "Donna", "Michelle", "Carol", "Amanda", "Dorothy", "Melissa", "Deborah", "Stephanie",
    "Rebecca", "Sharon", "Laura", "Cynthia", "Kathleen", "Amy", "Angela", "Shirley", "Anna",
    "Brenda", "Pamela", "Emma", "Nicole", "Helen", "Samantha", "Katherine", "Christine", "Debra",
    "Rachel", "Carolyn", "Janet", "Catherine", "Maria", "Heather", "Diane", "Ruth", "Julie",
    "Olivia", "Joyce", "Virginia",
];

const LAST_NAMES: [&str; 50] = [
    "Smith", "Johnson", "Williams", "Brown", "Jones", "Garcia", "Miller", "Davis", "Rodriguez",
    "Martinez", "Hernandez", "Lopez", "Gonzalez", "Wilson", "Anderson", "Thomas", "Taylor",
    "Moore", "Jackson", "Martin", "Lee", "Perez", "Thompson", "White", "Harris", "Sanchez",
    "Clark", "Ramirez", "Lewis", "Robinson", "Walker", "Young", "Allen", "King", "Wright",
    "Scott", "Torres", "Nguyen", "Hill", "Flores", "Green", "Adams", "Nelson", "Baker", "Hall",
    "Rivera", "Campbell", "Mitchell", "Carter", "Roberts",
];

const UPPERCASE_AND_DIGITS: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";

/// Returns the generator for `type_tag`, or `None` when the VR cannot be generated.
pub fn generator_for(type_tag: TypeTag) -> Option<Generator> {
    let generator: Generator = match type_tag {
        TypeTag::AS => |rng, _| TagValue::Text(age_string(rng)),
        TypeTag::DA => |rng, _| TagValue::Text(date(rng)),
        TypeTag::DS => |rng, _| TagValue::Text(decimal_string(rng)),
        TypeTag::DT => |rng, _| TagValue::Text(date_time(rng)),
        TypeTag::IS => |rng, _| TagValue::Text(integer_string(rng)),
        TypeTag::LO => |rng, _| TagValue::Text(long_string(rng)),
        TypeTag::LT => |rng, _| TagValue::Text(long_text(rng)),
        TypeTag::PN => |rng, hint| TagValue::Text(personal_name(rng, hint)),
        TypeTag::SH => |rng, _| TagValue::Text(short_string(rng)),
        TypeTag::ST => |rng, _| TagValue::Text(short_text(rng)),
        TypeTag::TM => |rng, _| TagValue::Text(time(rng)),
        TypeTag::UI => |rng, _| TagValue::Text(unique_identifier(rng)),
        TypeTag::US => |rng, _| TagValue::UnsignedShort(unsigned_short(rng)),
        _ => return None,
    };
    Some(generator)
}

/// Generator bound to the patient identifier attribute, which is LO but gets a tighter format.
pub fn patient_id_generator() -> Generator {
    |rng, _| TagValue::Text(patient_id(rng))
}

fn digits<R: Rng + ?Sized>(rng: &mut R, len: usize) -> String {
    (0..len)
        .map(|_| char::from(b'0' + rng.gen_range(0..10u8)))
        .collect()
}

fn alphanumeric<R: Rng + ?Sized>(rng: &mut R, max_len: usize) -> String {
    let len = rng.gen_range(1..=max_len);
    (0..len).map(|_| char::from(rng.sample(Alphanumeric))).collect()
}

fn hhmmss<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{:02}{:02}{:02}",
        rng.gen_range(0..=23),
        rng.gen_range(0..=59),
        rng.gen_range(0..=59)
    )
}

/// `XXXY`: three digits then `Y`. Only ages in years are produced.
pub fn age_string<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!("{}Y", digits(rng, 3))
}

/// `YYYYMMDD` with year in 1950..=2020, month 1..=12 and day 1..=30, drawn independently.
pub fn date<R: Rng + ?Sized>(rng: &mut R) -> String {
    format!(
        "{}{:02}{:02}",
        rng.gen_range(1950..=2020),
        rng.gen_range(1..=12),
        rng.gen_range(1..=30)
    )
}

/// 1 to 15 digits; fixed point only.
pub fn decimal_string<R: Rng + ?Sized>(rng: &mut R) -> String {
    let len = rng.gen_range(1..16);
    digits(rng, len)
}

/// `YYYYMMDDHHMMSS`.
pub fn date_time<R: Rng + ?Sized>(rng: &mut R) -> String {
    let date = date(rng);
    format!("{date}{}", hhmmss(rng))
}

/// Signed integer in `-2^31..=2^31 - 2`.
pub fn integer_string<R: Rng + ?Sized>(rng: &mut R) -> String {
    rng.gen_range(i32::MIN..i32::MAX).to_string()
}

/// 1 to 63 alphanumeric characters.
pub fn long_string<R: Rng + ?Sized>(rng: &mut R) -> String {
    alphanumeric(rng, 63)
}

/// 1 to 1023 alphanumeric characters.
pub fn long_text<R: Rng + ?Sized>(rng: &mut R) -> String {
    alphanumeric(rng, 1023)
}

/// 1 to 15 alphanumeric characters.
pub fn short_string<R: Rng + ?Sized>(rng: &mut R) -> String {
    alphanumeric(rng, 15)
}

/// 1 to 1023 alphanumeric characters.
pub fn short_text<R: Rng + ?Sized>(rng: &mut R) -> String {
    alphanumeric(rng, 1023)
}

/// `HHMMSS`.
pub fn time<R: Rng + ?Sized>(rng: &mut R) -> String {
    hhmmss(rng)
}

/// Four dot-separated integers in 1..=999, e.g. `731.42.918.3`.
pub fn unique_identifier<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..4)
        .map(|_| rng.gen_range(1..=999).to_string())
        .collect::<Vec<_>>()
        .join(".")
}

pub fn unsigned_short<R: Rng + ?Sized>(rng: &mut R) -> u16 {
    rng.gen()
}

/// `Last^First`. The first name list depends on `hint`; with no hint both lists are used.
pub fn personal_name<R: Rng + ?Sized>(rng: &mut R, hint: Option<SexHint>) -> String {
    let last = LAST_NAMES.choose(rng).copied().unwrap_or(LAST_NAMES[0]);
    let first = match hint {
        Some(SexHint::Male) => FIRST_NAMES_MALE.choose(rng),
        Some(SexHint::Female) => FIRST_NAMES_FEMALE.choose(rng),
        None => {
            let index = rng.gen_range(0..FIRST_NAMES_FEMALE.len() + FIRST_NAMES_MALE.len());
            FIRST_NAMES_FEMALE
                .get(index)
                .or_else(|| FIRST_NAMES_MALE.get(index - FIRST_NAMES_FEMALE.len()))
        }
    };
    format!("{last}^{}", first.copied().unwrap_or(FIRST_NAMES_FEMALE[0]))
}

/// Ten characters from `A-Z0-9`.
pub fn patient_id<R: Rng + ?Sized>(rng: &mut R) -> String {
    (0..10)
        .map(|_| char::from(UPPERCASE_AND_DIGITS[rng.gen_range(0..UPPERCASE_AND_DIGITS.len())]))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const DRAWS: usize = 500;

    fn rng() -> StdRng {
        StdRng::seed_from_u64(0x00D1_C0E5)
    }

    fn all_digits(value: &str) -> bool {
        value.bytes().all(|b| b.is_ascii_digit())
    }

    fn check_date(value: &str) {
        assert_eq!(value.len(), 8, "{value}");
        assert!(all_digits(value), "{value}");
        let year: u32 = value[0..4].parse().unwrap();
        let month: u32 = value[4..6].parse().unwrap();
        let day: u32 = value[6..8].parse().unwrap();
        assert!((1950..=2020).contains(&year), "{value}");
        assert!((1..=12).contains(&month), "{value}");
        assert!((1..=30).contains(&day), "{value}");
    }

    fn check_time(value: &str) {
        assert_eq!(value.len(), 6, "{value}");
        assert!(all_digits(value), "{value}");
        let hours: u32 = value[0..2].parse().unwrap();
        let minutes: u32 = value[2..4].parse().unwrap();
        let seconds: u32 = value[4..6].parse().unwrap();
        assert!(hours <= 23 && minutes <= 59 && seconds <= 59, "{value}");
    }

    #[test]
    fn date_stays_in_documented_range() {
        let mut rng = rng();
        for _ in 0..DRAWS {
            check_date(&date(&mut rng));
        }
    }

    #[test]
    fn time_is_hhmmss() {
        let mut rng = rng();
        for _ in 0..DRAWS {
            check_time(&time(&mut rng));
        }
    }

    #[test]
    fn date_time_is_date_followed_by_time() {
        let mut rng = rng();
        for _ in 0..DRAWS {
            let value = date_time(&mut rng);
            assert_eq!(value.len(), 14);
            check_date(&value[..8]);
            check_time(&value[8..]);
        }
    }

    #[test]
    fn age_string_is_three_digits_and_y() {
        let mut rng = rng();
        for _ in 0..DRAWS {
            let value = age_string(&mut rng);
            assert_eq!(value.len(), 4);
            assert!(all_digits(&value[..3]));
            assert!(value.ends_with('Y'));
        }
    }

    #[test]
    fn decimal_string_has_one_to_fifteen_digits() {
        let mut rng = rng();
        for _ in 0..DRAWS {
            let value = decimal_string(&mut rng);
            assert!((1..=15).contains(&value.len()), "{value}");
            assert!(all_digits(&value));
        }
    }

    #[test]
    fn integer_string_fits_asymmetric_range() {
        let mut rng = rng();
        for _ in 0..DRAWS {
            let value: i64 = integer_string(&mut rng).parse().unwrap();
            assert!(value >= -(1i64 << 31));
            assert!(value <= (1i64 << 31) - 2);
        }
    }

    #[test]
    fn alphanumeric_generators_respect_their_maximum_length() {
        let mut rng = rng();
        let cases: [(fn(&mut StdRng) -> String, usize); 4] = [
            (long_string, 63),
            (long_text, 1023),
            (short_string, 15),
            (short_text, 1023),
        ];
        for (generate, max_len) in cases {
            for _ in 0..DRAWS {
                let value = generate(&mut rng);
                assert!((1..=max_len).contains(&value.len()));
                assert!(value.bytes().all(|b| b.is_ascii_alphanumeric()));
            }
        }
    }

    #[test]
    fn unique_identifier_has_four_numeric_groups() {
        let mut rng = rng();
        for _ in 0..DRAWS {
            let value = unique_identifier(&mut rng);
            let groups: Vec<&str> = value.split('.').collect();
            assert_eq!(groups.len(), 4, "{value}");
            for group in groups {
                let number: u32 = group.parse().unwrap();
                assert!((1..=999).contains(&number));
            }
        }
    }

    #[test]
    fn personal_name_uses_hinted_list() {
        let mut rng = rng();
        for _ in 0..DRAWS {
            let value = personal_name(&mut rng, Some(SexHint::Male));
            let (last, first) = value.split_once('^').unwrap();
            assert!(LAST_NAMES.contains(&last));
            assert!(FIRST_NAMES_MALE.contains(&first));

            let value = personal_name(&mut rng, Some(SexHint::Female));
            let (_, first) = value.split_once('^').unwrap();
            assert!(FIRST_NAMES_FEMALE.contains(&first));
        }
    }

    #[test]
    fn personal_name_without_hint_draws_from_both_lists() {
        let mut rng = rng();
        let mut saw_male = false;
        let mut saw_female = false;
        for _ in 0..DRAWS {
            let value = personal_name(&mut rng, None);
            let (last, first) = value.split_once('^').unwrap();
            assert!(!last.is_empty() && !first.is_empty());
            saw_male |= FIRST_NAMES_MALE.contains(&first);
            saw_female |= FIRST_NAMES_FEMALE.contains(&first);
        }
        assert!(saw_male && saw_female);
    }

    #[test]
    fn patient_id_is_ten_uppercase_alphanumerics() {
        let mut rng = rng();
        for _ in 0..DRAWS {
            let value = patient_id(&mut rng);
            assert_eq!(value.len(), 10);
            assert!(value
                .bytes()
                .all(|b| b.is_ascii_uppercase() || b.is_ascii_digit()));
        }
    }

    #[test]
    fn generator_table_covers_closed_set_only() {
        let supported = [
            TypeTag::AS,
            TypeTag::DA,
            TypeTag::DS,
            TypeTag::DT,
            TypeTag::IS,
            TypeTag::LO,
            TypeTag::LT,
            TypeTag::PN,
            TypeTag::SH,
            TypeTag::ST,
            TypeTag::TM,
            TypeTag::UI,
            TypeTag::US,
        ];
        for type_tag in supported {
            assert!(generator_for(type_tag).is_some(), "{type_tag}");
        }
        for type_tag in [TypeTag::CS, TypeTag::SQ, TypeTag::FD, TypeTag::OB, TypeTag::UT] {
            assert!(generator_for(type_tag).is_none(), "{type_tag}");
        }
    }

    #[test]
    fn unsigned_short_generator_yields_binary_value() {
        let mut rng = rng();
        let generate = generator_for(TypeTag::US).unwrap();
        assert!(matches!(generate(&mut rng, None), TagValue::UnsignedShort(_)));
    }

    #[test]
    fn generators_are_not_constant() {
        let mut rng = rng();
        let first = long_string(&mut rng);
        let differs = (0..20).any(|_| long_string(&mut rng) != first);
        assert!(differs);
    }
}
