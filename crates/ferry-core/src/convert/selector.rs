use super::{
    catalog::{
        BoolToString, BoolToZeroOne, BytesToString, CastingConverter, CharToString,
        CollectionToJson, DateOnlyToString, DateTimeOffsetToBinary, DateTimeOffsetToBytes,
        DateTimeOffsetToString, DateTimeToBinary, DateTimeToString, EnumToNumber, EnumToString,
        GuidToBytes, GuidToString, IpAddressToBytes, IpAddressToString, NumberToBytes,
        NumberToString, PhysicalAddressToBytes, PhysicalAddressToString, StringToBool,
        StringToBytes, StringToChar, StringToDateOnly, StringToDateTime, StringToDateTimeOffset,
        StringToEnum, StringToGuid, StringToNumber, StringToTimeOnly, StringToTimeSpan,
        StringToUri, TimeOnlyToString, TimeOnlyToTicks, TimeSpanToString, TimeSpanToTicks,
        UriToString,
    },
    ConverterCache, ConverterInfo,
};
use crate::{
    stmt::{is_json_element, Type, NUMERIC},
    Result,
};
use indexmap::IndexSet;
use std::{fmt, sync::Arc, vec};

/// Builds the descriptor for a `(model type, provider type)` pair.
type Build = fn(&Type, &Type) -> Result<ConverterInfo>;

const SIGNED: &[Type] = &[Type::I8, Type::I16, Type::I32, Type::I64, Type::Decimal];

const UNSIGNED: &[Type] = &[
    Type::U8,
    Type::I16,
    Type::U16,
    Type::I32,
    Type::U32,
    Type::I64,
    Type::U64,
    Type::Decimal,
];

const FLOATING: &[Type] = &[Type::F32, Type::F64, Type::Decimal];

const CHAR: &[Type] = &[
    Type::Char,
    Type::I32,
    Type::U16,
    Type::U32,
    Type::I64,
    Type::U64,
    Type::Decimal,
];

/// Ranks the built-in conversions available for a model type.
///
/// Descriptors are memoized in the selector's [`ConverterCache`]. Clones of a
/// selector share the cache.
#[derive(Debug, Clone, Default)]
pub struct Selector {
    cache: ConverterCache,
}

/// Iterator over the descriptors returned by [`Selector::select`], best
/// candidate first.
pub struct Select<'a> {
    cache: &'a ConverterCache,
    entries: vec::IntoIter<Entry>,
}

#[derive(Debug)]
struct Entry {
    model_ty: Type,
    provider_ty: Type,
    build: Build,
}

/// The ranked candidates for one selection.
struct Plan {
    model_ty: Type,
    provider_ty: Option<Type>,
    entries: Vec<Entry>,
}

impl Selector {
    pub fn new() -> Selector {
        Selector::default()
    }

    /// Creates a selector backed by an existing cache.
    pub fn with_cache(cache: ConverterCache) -> Selector {
        Selector { cache }
    }

    pub fn cache(&self) -> &ConverterCache {
        &self.cache
    }

    /// Returns the conversions from `model_ty` to storage, most preferred
    /// first.
    ///
    /// When `provider_ty` is given, only conversions to that type are
    /// returned. `Option` wrappers on either type are ignored. A pair no rule
    /// covers yields an empty iterator.
    ///
    /// Each call starts over. Descriptors are built lazily as the iterator
    /// advances, so taking only the first one builds only the first one.
    pub fn select(&self, model_ty: &Type, provider_ty: Option<&Type>) -> Select<'_> {
        let plan = Plan::new(
            model_ty.unwrap_option().clone(),
            provider_ty.map(|ty| ty.unwrap_option().clone()),
        );

        let entries = plan.build();

        tracing::trace!(
            model_ty = %model_ty,
            provider_ty = ?provider_ty,
            candidates = ?entries.iter().map(|entry| entry.provider_ty.to_string()).collect::<Vec<_>>(),
            "planned converter selection"
        );

        Select {
            cache: &self.cache,
            entries: entries.into_iter(),
        }
    }
}

impl Iterator for Select<'_> {
    type Item = Arc<ConverterInfo>;

    fn next(&mut self) -> Option<Arc<ConverterInfo>> {
        for Entry {
            model_ty,
            provider_ty,
            build,
        } in self.entries.by_ref()
        {
            match self.cache.get_or_try_insert(model_ty, provider_ty, build) {
                Ok(info) => return Some(info),
                Err(err) => tracing::error!(%err, "failed to build converter descriptor"),
            }
        }

        None
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.entries.len()))
    }
}

impl fmt::Debug for Select<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Select")
            .field("remaining", &self.entries.as_slice())
            .finish()
    }
}

impl Plan {
    fn new(model_ty: Type, provider_ty: Option<Type>) -> Plan {
        Plan {
            model_ty,
            provider_ty,
            entries: vec![],
        }
    }

    fn build(mut self) -> Vec<Entry> {
        match self.model_ty.clone() {
            Type::Enum(_) => {
                self.numeric_conventions(EnumToNumber::default_info, Some(enum_after_preferred));
            }
            Type::Bool => {
                self.numeric_conventions(BoolToZeroOne::default_info, None);
                self.push_if(Type::String, BoolToString::default_info);
                self.push_if(Type::Bytes, bool_to_bytes);
            }
            Type::Char => {
                self.push_if(Type::String, CharToString::default_info);
                self.numeric_conventions(CastingConverter::default_info, Some(char_after_preferred));
            }
            Type::Uuid => {
                self.push_if(Type::String, GuidToString::default_info);
                self.push_if(Type::Bytes, GuidToBytes::default_info);
            }
            Type::Bytes => {
                self.push_if(Type::String, BytesToString::default_info);
            }
            Type::Url => {
                self.push_if(Type::String, UriToString::default_info);
            }
            Type::String => self.string_conventions(),
            Type::DateTime => {
                self.push_if(Type::String, DateTimeToString::default_info);
                self.push_if(Type::I64, DateTimeToBinary::default_info);
                self.push_if(Type::Bytes, date_time_to_bytes);
            }
            Type::DateTimeOffset => {
                self.push_if(Type::String, DateTimeOffsetToString::default_info);
                self.push_if(Type::I64, DateTimeOffsetToBinary::default_info);
                self.push_if(Type::Bytes, DateTimeOffsetToBytes::default_info);
            }
            Type::Duration => {
                self.push_if(Type::String, TimeSpanToString::default_info);
                self.push_if(Type::I64, TimeSpanToTicks::default_info);
                self.push_if(Type::Bytes, duration_to_bytes);
            }
            Type::Time => {
                self.push_if(Type::String, TimeOnlyToString::default_info);
                self.push_if(Type::I64, TimeOnlyToTicks::default_info);
                self.push_if(Type::Bytes, time_to_bytes);
            }
            Type::Date => {
                self.push_if(Type::String, DateOnlyToString::default_info);
                self.push_if(Type::Bytes, date_to_bytes);
            }
            Type::IpAddr => {
                self.push_if(Type::String, IpAddressToString::default_info);
                if self.requires(&Type::Bytes) {
                    self.push(Type::Bytes, IpAddressToBytes::default_info);
                }
            }
            Type::PhysicalAddress => {
                self.push_if(Type::String, PhysicalAddressToString::default_info);
                if self.requires(&Type::Bytes) {
                    self.push(Type::Bytes, PhysicalAddressToBytes::default_info);
                }
            }
            Type::List(item) if is_json_element(&item) => {
                self.push_if(Type::String, CollectionToJson::default_info);
            }
            ty if ty.is_numeric() => {
                let store_as_number = match &self.provider_ty {
                    None => true,
                    Some(provider) => {
                        provider.is_bytes() || provider.is_string() || provider.is_numeric()
                    }
                };

                if store_as_number {
                    self.numeric_conventions(
                        CastingConverter::default_info,
                        Some(number_after_preferred),
                    );
                }
            }
            _ => {}
        }

        self.entries
    }

    /// A string model has exactly one candidate per provider type.
    fn string_conventions(&mut self) {
        let Some(provider) = self.provider_ty.clone() else {
            self.push(Type::Bytes, StringToBytes::default_info);
            return;
        };

        let build: Build = match &provider {
            Type::Bytes => StringToBytes::default_info,
            Type::Enum(_) => StringToEnum::default_info,
            ty if ty.is_numeric() => StringToNumber::default_info,
            Type::DateTime => StringToDateTime::default_info,
            Type::DateTimeOffset => StringToDateTimeOffset::default_info,
            Type::Date => StringToDateOnly::default_info,
            Type::Duration => StringToTimeSpan::default_info,
            Type::Time => StringToTimeOnly::default_info,
            Type::Uuid => StringToGuid::default_info,
            Type::Bool => StringToBool::default_info,
            Type::Char => StringToChar::default_info,
            Type::Url => StringToUri::default_info,
            _ => return,
        };

        self.push(provider, build);
    }

    /// Ranks numeric targets for a numeric-like model.
    ///
    /// Widening conversions within the model's own family come first, then
    /// whatever `after_preferred` adds, then every remaining numeric type.
    fn numeric_conventions(&mut self, build: Build, after_preferred: Option<fn(&mut Plan)>) {
        let mut used = IndexSet::new();
        used.insert(self.model_ty.clone());

        if let Type::Enum(ty) = &self.model_ty {
            let underlying = ty.underlying().clone();

            if self.accepts(&underlying) {
                self.push(underlying.clone(), build);
            }

            used.insert(underlying);
        }

        let underlying = self.model_ty.unwrap_enum().clone();

        self.ladder(SIGNED, &underlying, &mut used, true, build);

        if matches!(underlying, Type::U8 | Type::U16 | Type::U32 | Type::U64) {
            self.ladder(UNSIGNED, &underlying, &mut used, true, build);
        }

        // Floating and char targets are offered again even when already used.
        if underlying.is_float() {
            self.ladder(FLOATING, &underlying, &mut used, false, build);
        }

        if underlying.is_char() {
            self.ladder(CHAR, &underlying, &mut used, false, build);
        }

        if let Some(after_preferred) = after_preferred {
            after_preferred(self);
        }

        for ty in NUMERIC {
            if !used.contains(ty) && self.accepts(ty) {
                self.push(ty.clone(), build);
            }
        }
    }

    /// Offers every type to the right of `model_ty` in `ladder`.
    fn ladder(
        &mut self,
        ladder: &[Type],
        model_ty: &Type,
        used: &mut IndexSet<Type>,
        skip_used: bool,
        build: Build,
    ) {
        let Some(start) = ladder.iter().position(|ty| ty == model_ty) else {
            return;
        };

        for ty in &ladder[start + 1..] {
            if !self.accepts(ty) || (skip_used && used.contains(ty)) {
                continue;
            }

            self.push(ty.clone(), build);
            used.insert(ty.clone());
        }
    }

    /// Returns `true` if no provider type was requested or `ty` is the one
    /// requested.
    fn accepts(&self, ty: &Type) -> bool {
        self.provider_ty.as_ref().map_or(true, |provider| provider == ty)
    }

    /// Returns `true` only if `ty` was explicitly requested.
    fn requires(&self, ty: &Type) -> bool {
        self.provider_ty.as_ref() == Some(ty)
    }

    fn push_if(&mut self, provider_ty: Type, build: Build) {
        if self.accepts(&provider_ty) {
            self.push(provider_ty, build);
        }
    }

    fn push(&mut self, provider_ty: Type, build: Build) {
        self.entries.push(Entry {
            model_ty: self.model_ty.clone(),
            provider_ty,
            build,
        });
    }
}

fn enum_after_preferred(plan: &mut Plan) {
    plan.push_if(Type::String, EnumToString::default_info);
    plan.push_if(Type::Bytes, enum_to_bytes);
}

fn char_after_preferred(plan: &mut Plan) {
    plan.push_if(Type::Bytes, char_to_bytes);
}

fn number_after_preferred(plan: &mut Plan) {
    plan.push_if(Type::String, NumberToString::default_info);
    plan.push_if(Type::Bytes, NumberToBytes::default_info);
}

/// Enum to its underlying integer, then to bytes.
fn enum_to_bytes(model_ty: &Type, _: &Type) -> Result<ConverterInfo> {
    let underlying = model_ty.unwrap_enum();

    Ok(EnumToNumber::default_info(model_ty, underlying)?
        .compose_with(NumberToBytes::default_info(underlying, &Type::Bytes)?))
}

fn bool_to_bytes(_: &Type, _: &Type) -> Result<ConverterInfo> {
    Ok(BoolToZeroOne::default_info(&Type::Bool, &Type::U8)?
        .compose_with(NumberToBytes::default_info(&Type::U8, &Type::Bytes)?))
}

fn char_to_bytes(_: &Type, _: &Type) -> Result<ConverterInfo> {
    Ok(CastingConverter::default_info(&Type::Char, &Type::U32)?
        .compose_with(NumberToBytes::default_info(&Type::U32, &Type::Bytes)?))
}

fn date_time_to_bytes(_: &Type, _: &Type) -> Result<ConverterInfo> {
    ticks_to_bytes(DateTimeToBinary::default_info(&Type::DateTime, &Type::I64)?)
}

fn duration_to_bytes(_: &Type, _: &Type) -> Result<ConverterInfo> {
    ticks_to_bytes(TimeSpanToTicks::default_info(&Type::Duration, &Type::I64)?)
}

fn time_to_bytes(_: &Type, _: &Type) -> Result<ConverterInfo> {
    ticks_to_bytes(TimeOnlyToTicks::default_info(&Type::Time, &Type::I64)?)
}

fn ticks_to_bytes(ticks: ConverterInfo) -> Result<ConverterInfo> {
    Ok(ticks.compose_with(NumberToBytes::default_info(&Type::I64, &Type::Bytes)?))
}

fn date_to_bytes(_: &Type, _: &Type) -> Result<ConverterInfo> {
    Ok(DateOnlyToString::default_info(&Type::Date, &Type::String)?
        .compose_with(StringToBytes::default_info(&Type::String, &Type::Bytes)?))
}
