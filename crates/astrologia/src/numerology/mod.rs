pub mod meanings;
pub mod reading;
pub mod reducer;

pub use meanings::{number_meaning, personal_year_meaning, NumberMeaning, PersonalYearMeaning};
pub use reading::NumerologyReading;
pub use reducer::{
    current_year, digit_sum, is_master_number, personal_number, personal_year_number, reduce_number,
    MASTER_NUMBERS,
};
