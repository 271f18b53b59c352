//! C ABI for non-native callers.
//!
//! Strings handed to callbacks are owned by this library and freed as soon
//! as the callback returns; copy them if they are needed later. Strings
//! returned to the caller (`EzifError::message`, the dictionary dump) must be
//! released with `ezif_string_free`.

use std::ffi::{c_char, c_void, CStr, CString};
use std::ptr;

use crate::dictionary::dump_dictionary;
use crate::error::Error;
use crate::reader::{self, DatumStart, MetadataHandler, ReadOptions, ValueSlot};
use crate::types::Family;

/// Error record. `code` is 0 and `message` null on success.
#[repr(C)]
#[derive(Debug)]
pub struct EzifError {
    pub code: i32,
    pub message: *mut c_char,
}

/// Scratch record filled before each value callback.
#[repr(C)]
#[derive(Debug)]
pub struct EzifValueHolder {
    pub double_value: f64,
    pub long_value: i64,
    pub str_value: *const c_char,
    pub lang_value: *const c_char,
    pub rational_n: u32,
    pub rational_d: u32,
    pub year: i32,
    pub month: i32,
    pub day: i32,
    pub hour: i32,
    pub minute: i32,
    pub second: i32,
    pub tz_hour: i32,
    pub tz_minute: i32,
}

impl Default for EzifValueHolder {
    fn default() -> Self {
        Self {
            double_value: 0.0,
            long_value: 0,
            str_value: ptr::null(),
            lang_value: ptr::null(),
            rational_n: 0,
            rational_d: 0,
            year: 0,
            month: 0,
            day: 0,
            hour: 0,
            minute: 0,
            second: 0,
            tz_hour: 0,
            tz_minute: 0,
        }
    }
}

pub type StartCallback = unsafe extern "C" fn(
    ctx: *mut c_void,
    family: *const c_char,
    group: *const c_char,
    tag_name: *const c_char,
    type_id: i32,
    label: *const c_char,
    interpreted_value: *const c_char,
    count: i64,
    repeatable: bool,
);
pub type ValueCallback = unsafe extern "C" fn(ctx: *mut c_void, holder: *const EzifValueHolder);
pub type EndCallback = unsafe extern "C" fn(ctx: *mut c_void, family: *const c_char);

/// Callback table. Null entries are skipped.
#[repr(C)]
#[derive(Debug, Clone, Copy)]
pub struct EzifHandlers {
    pub on_start: Option<StartCallback>,
    pub on_value: Option<ValueCallback>,
    pub on_end: Option<EndCallback>,
}

/// NUL bytes cannot cross the boundary; they are dropped.
fn c_string(s: &str) -> CString {
    CString::new(s.replace('\0', "")).unwrap_or_default()
}

struct FfiHandler<'a> {
    handlers: &'a EzifHandlers,
    holder: &'a mut EzifValueHolder,
    ctx: *mut c_void,
}

impl MetadataHandler for FfiHandler<'_> {
    fn on_start(&mut self, datum: &DatumStart<'_>) {
        let Some(callback) = self.handlers.on_start else {
            return;
        };
        let family = c_string(datum.family.name());
        let group = c_string(datum.group);
        let tag_name = c_string(datum.tag_name);
        let label = c_string(datum.label);
        let interpreted = c_string(datum.interpreted_value);
        unsafe {
            callback(
                self.ctx,
                family.as_ptr(),
                group.as_ptr(),
                tag_name.as_ptr(),
                datum.type_id.code(),
                label.as_ptr(),
                interpreted.as_ptr(),
                datum.count as i64,
                datum.repeatable,
            )
        };
    }

    fn on_value(&mut self, slot: &ValueSlot) {
        let Some(callback) = self.handlers.on_value else {
            return;
        };
        let string = slot.string.as_deref().map(c_string);
        let lang = slot.lang.as_deref().map(c_string);
        let date = slot.date.unwrap_or_default();
        let time = slot.time.unwrap_or_default();

        let holder = &mut *self.holder;
        *holder = EzifValueHolder {
            double_value: slot.double_value,
            long_value: slot.long_value,
            str_value: string.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
            lang_value: lang.as_ref().map_or(ptr::null(), |s| s.as_ptr()),
            rational_n: slot.numerator,
            rational_d: slot.denominator,
            year: date.year,
            month: date.month,
            day: date.day,
            hour: time.hour,
            minute: time.minute,
            second: time.second,
            tz_hour: time.tz_hour,
            tz_minute: time.tz_minute,
        };
        unsafe { callback(self.ctx, &*holder) };

        // the strings die here; don't leave dangling pointers behind
        holder.str_value = ptr::null();
        holder.lang_value = ptr::null();
    }

    fn on_end(&mut self, family: Family) {
        if let Some(callback) = self.handlers.on_end {
            let family = c_string(family.name());
            unsafe { callback(self.ctx, family.as_ptr()) };
        }
    }
}

/// Read the image at `locator` (path or URL), streaming every datum
/// through `handlers`.
///
/// # Safety
///
/// `locator` must be a NUL-terminated string. `err`, `holder` and
/// `handlers` must each be null or valid for the duration of the call.
/// `ctx` is passed through untouched.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ezif_read_metadata(
    locator: *const c_char,
    err: *mut EzifError,
    holder: *mut EzifValueHolder,
    handlers: *const EzifHandlers,
    ctx: *mut c_void,
) {
    let result = if locator.is_null() {
        Err(Error::InvalidLocator(String::new()))
    } else {
        let locator = unsafe { CStr::from_ptr(locator) }.to_string_lossy();
        let no_handlers = EzifHandlers {
            on_start: None,
            on_value: None,
            on_end: None,
        };
        let handlers = unsafe { handlers.as_ref() }.unwrap_or(&no_handlers);
        let mut local = EzifValueHolder::default();
        let holder = match unsafe { holder.as_mut() } {
            Some(holder) => holder,
            None => &mut local,
        };
        let mut handler = FfiHandler { handlers, holder, ctx };
        let mut slot = ValueSlot::default();
        reader::read_metadata_with(&locator, &ReadOptions::default(), &mut handler, &mut slot)
    };

    let Some(err) = (unsafe { err.as_mut() }) else {
        return;
    };
    match result {
        Ok(()) => {
            err.code = 0;
            err.message = ptr::null_mut();
        }
        Err(e) => {
            log::debug!("ezif_read_metadata failed: {e}");
            err.code = e.code();
            err.message = c_string(&e.to_string()).into_raw();
        }
    }
}

/// The tag dictionary as pretty-printed JSON, or null if it could not be
/// serialized. Release with `ezif_string_free`.
#[unsafe(no_mangle)]
pub extern "C" fn ezif_dump_dictionary() -> *mut c_char {
    match dump_dictionary().to_json() {
        Ok(json) => c_string(&json).into_raw(),
        Err(e) => {
            log::error!("Failed to serialize dictionary: {e}");
            ptr::null_mut()
        }
    }
}

/// Free a string returned by this library.
///
/// # Safety
///
/// `s` must be null or a pointer obtained from this library that has not
/// been freed yet.
#[unsafe(no_mangle)]
pub unsafe extern "C" fn ezif_string_free(s: *mut c_char) {
    if !s.is_null() {
        drop(unsafe { CString::from_raw(s) });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image::fixtures;
    use tempfile::TempDir;

    #[derive(Default)]
    struct Counts {
        starts: Vec<String>,
        values: usize,
        ends: usize,
        rationals: Vec<(u32, u32)>,
        strings: Vec<String>,
    }

    unsafe extern "C" fn on_start(
        ctx: *mut c_void,
        family: *const c_char,
        group: *const c_char,
        tag_name: *const c_char,
        _type_id: i32,
        _label: *const c_char,
        _interpreted: *const c_char,
        _count: i64,
        _repeatable: bool,
    ) {
        let counts = unsafe { &mut *(ctx as *mut Counts) };
        let part = |p: *const c_char| unsafe { CStr::from_ptr(p) }.to_string_lossy().into_owned();
        counts
            .starts
            .push(format!("{}.{}.{}", part(family), part(group), part(tag_name)));
    }

    unsafe extern "C" fn on_value(ctx: *mut c_void, holder: *const EzifValueHolder) {
        let counts = unsafe { &mut *(ctx as *mut Counts) };
        let holder = unsafe { &*holder };
        counts.values += 1;
        if holder.rational_d != 0 {
            counts.rationals.push((holder.rational_n, holder.rational_d));
        }
        if !holder.str_value.is_null() {
            let s = unsafe { CStr::from_ptr(holder.str_value) };
            counts.strings.push(s.to_string_lossy().into_owned());
        }
    }

    unsafe extern "C" fn on_end(ctx: *mut c_void, _family: *const c_char) {
        let counts = unsafe { &mut *(ctx as *mut Counts) };
        counts.ends += 1;
    }

    const HANDLERS: EzifHandlers = EzifHandlers {
        on_start: Some(on_start),
        on_value: Some(on_value),
        on_end: Some(on_end),
    };

    fn read(locator: &str) -> (EzifError, Counts) {
        let locator = CString::new(locator).unwrap();
        let mut err = EzifError {
            code: -1,
            message: ptr::null_mut(),
        };
        let mut holder = EzifValueHolder::default();
        let mut counts = Counts::default();
        unsafe {
            ezif_read_metadata(
                locator.as_ptr(),
                &mut err,
                &mut holder,
                &HANDLERS,
                &mut counts as *mut Counts as *mut c_void,
            )
        };
        (err, counts)
    }

    #[test]
    fn missing_file_sets_error_and_fires_nothing() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.jpg");
        let (err, counts) = read(&path.display().to_string());

        assert_eq!(err.code, 9);
        assert!(!err.message.is_null());
        let message = unsafe { CStr::from_ptr(err.message) }.to_string_lossy().into_owned();
        assert!(message.contains("missing.jpg"));
        unsafe { ezif_string_free(err.message) };

        assert!(counts.starts.is_empty());
        assert_eq!(counts.values + counts.ends, 0);
    }

    #[test]
    fn streams_jpeg_through_callbacks() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.jpg");
        let jpeg = fixtures::jpeg_with(Some(&fixtures::tiff_le()), Some(&fixtures::iptc_keywords()), None);
        std::fs::write(&path, jpeg).unwrap();

        let (err, counts) = read(&path.display().to_string());
        assert_eq!(err.code, 0);
        assert!(err.message.is_null());
        assert_eq!(counts.starts.len(), 7);
        assert_eq!(counts.ends, 7);
        assert_eq!(counts.starts[0], "Exif.Image.Make");
        assert!(counts.rationals.contains(&(3, 2)));
        assert!(counts.strings.iter().any(|s| s == "boats"));
    }

    #[test]
    fn null_arguments_are_tolerated() {
        let mut err = EzifError {
            code: 0,
            message: ptr::null_mut(),
        };
        unsafe { ezif_read_metadata(ptr::null(), &mut err, ptr::null_mut(), ptr::null(), ptr::null_mut()) };
        assert_eq!(err.code, 31);
        unsafe { ezif_string_free(err.message) };

        let dir = TempDir::new().unwrap();
        let path = dir.path().join("photo.tif");
        std::fs::write(&path, fixtures::tiff_le()).unwrap();
        let locator = CString::new(path.display().to_string()).unwrap();
        unsafe {
            ezif_read_metadata(locator.as_ptr(), ptr::null_mut(), ptr::null_mut(), ptr::null(), ptr::null_mut())
        };
    }

    #[test]
    fn dictionary_dump_is_json() {
        let json = ezif_dump_dictionary();
        assert!(!json.is_null());
        let text = unsafe { CStr::from_ptr(json) }.to_string_lossy().into_owned();
        unsafe { ezif_string_free(json) };

        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert!(parsed["IPTC"]["Application2"]["Keywords"]["repeatable"].as_bool().unwrap());
    }
}
