pub mod convert;
pub mod wav;

pub use convert::{ConvertError, convert_to_wav, converted_wav_path};
pub use wav::{SAMPLE_RATE, read_pcm, samples_to_f32};
