//! Declarative record macros.
//!
//! A record is declared once as a plain struct plus (when the wire order
//! differs from the struct) a `layout { .. }` list. The layout entries are
//!
//! - `name` for an ordinary field,
//! - `name: count<u8|u16|u32>` for the position of the element count of the
//!   list `name`,
//! - `name: list` for the position of the elements of `name`,
//! - `name: words<u8|u16|u32>` for a length field holding the encoded size
//!   of the whole record in 32-bit words. `name` is not a struct field; the
//!   value is derived on write and checked once the record is read.
//!
//! Size, write, read, describe, hash and equality are all generated from that
//! single list, so the marshaling paths cannot drift apart.

/// Implements [`Field`](crate::Field), [`Record`](crate::Record),
/// [`PartialEq`] and [`Hash`](core::hash::Hash) for a struct from its wire
/// layout.
#[macro_export]
macro_rules! impl_record {
    (@size $s:ident, $f:ident) => {
        $crate::Field::field_size(&$s.$f)
    };
    (@size $s:ident, $f:ident : list) => {
        $crate::list::list_size(&$s.$f)
    };
    (@size $s:ident, $f:ident : count<$cty:ty>) => {
        <$cty as $crate::list::CountField>::WIDTH
    };
    (@size $s:ident, $f:ident : words<$cty:ty>) => {
        <$cty as $crate::list::CountField>::WIDTH
    };

    (@write $s:ident, $w:ident, $f:ident) => {
        $crate::Field::write_field(&$s.$f, $w)?;
    };
    (@write $s:ident, $w:ident, $f:ident : list) => {
        $crate::list::write_list(&$s.$f, $w)?;
    };
    (@write $s:ident, $w:ident, $f:ident : count<$cty:ty>) => {
        $crate::list::write_count::<$cty>($w, $s.$f.len(), stringify!($f))?;
    };
    (@write $s:ident, $w:ident, $f:ident : words<$cty:ty>) => {
        $crate::list::write_words::<$cty>($w, $crate::Record::encoded_size($s), stringify!($f))?;
    };

    (@read $s:ident, $r:ident, $f:ident) => {
        $crate::Field::read_field(&mut $s.$f, $r)?;
    };
    (@read $s:ident, $r:ident, $f:ident : list) => {
        $crate::list::read_list(&mut $s.$f, $f, $r)?;
    };
    (@read $s:ident, $r:ident, $f:ident : count<$cty:ty>) => {
        let $f = $crate::list::read_count::<$cty>($r)?;
    };
    (@read $s:ident, $r:ident, $f:ident : words<$cty:ty>) => {
        let $f = $crate::list::read_count::<$cty>($r)?;
    };

    (@check $s:ident, $f:ident : words<$cty:ty>) => {
        $crate::list::check_words($f, $crate::Record::encoded_size($s), stringify!($f))?;
    };
    (@check $s:ident, $f:ident $(: $kind:ident $(<$cty:ty>)?)?) => {};

    (@describe $s:ident, $out:ident, $f:ident) => {
        $crate::Field::describe_field(&$s.$f, stringify!($f), $out)?;
    };
    (@describe $s:ident, $out:ident, $f:ident : list) => {
        $crate::list::describe_list(&$s.$f, stringify!($f), $out)?;
    };
    (@describe $s:ident, $out:ident, $f:ident : count<$cty:ty>) => {
        $crate::describe::count(
            $out,
            stringify!($f),
            <$cty as $crate::list::CountField>::TYPE_NAME,
            $s.$f.len(),
        )?;
    };
    (@describe $s:ident, $out:ident, $f:ident : words<$cty:ty>) => {
        $crate::describe::scalar(
            $out,
            stringify!($f),
            <$cty as $crate::list::CountField>::TYPE_NAME,
            $crate::Record::encoded_size($s) / 4,
        )?;
    };

    (@hash $s:ident, $h:ident, $f:ident) => {
        $crate::Field::hash_field(&$s.$f, $h);
    };
    (@hash $s:ident, $h:ident, $f:ident : list) => {
        $crate::list::hash_list(&$s.$f, $h);
    };
    // Counts are derived from the list, which already hashes its length.
    (@hash $s:ident, $h:ident, $f:ident : count<$cty:ty>) => {};
    (@hash $s:ident, $h:ident, $f:ident : words<$cty:ty>) => {};

    (@eq $s:ident, $o:ident, $f:ident) => {
        $crate::Field::field_eq(&$s.$f, &$o.$f)
    };
    (@eq $s:ident, $o:ident, $f:ident : list) => {
        $crate::list::list_eq(&$s.$f, &$o.$f)
    };
    (@eq $s:ident, $o:ident, $f:ident : $kind:ident<$cty:ty>) => {
        true
    };

    ($name:ident { $( $f:ident $(: $kind:ident $(<$cty:ty>)?)? ),+ $(,)? }) => {
        impl $crate::Field for $name {
            const TYPE_NAME: &'static str = stringify!($name);

            fn field_size(&self) -> usize {
                $crate::Record::encoded_size(self)
            }

            fn write_field(&self, w: &mut $crate::Writer) -> $crate::Result<()> {
                $crate::Record::write(self, w)
            }

            fn read_field(&mut self, r: &mut $crate::Reader<'_>) -> $crate::Result<()> {
                $crate::Record::read(self, r)
            }

            fn describe_field(
                &self,
                name: &str,
                out: &mut dyn ::core::fmt::Write,
            ) -> ::core::fmt::Result {
                $crate::describe::open(out, name, stringify!($name))?;
                $crate::Record::describe_fields(self, out)?;
                $crate::describe::close(out, name)
            }

            fn hash_field(&self, state: &mut dyn ::core::hash::Hasher) {
                $crate::Record::hash_fields(self, state)
            }

            fn field_eq(&self, other: &Self) -> bool {
                self == other
            }
        }

        impl $crate::Record for $name {
            const NAME: &'static str = stringify!($name);

            fn encoded_size(&self) -> usize {
                0 $( + $crate::impl_record!(@size self, $f $(: $kind $(<$cty>)?)?) )+
            }

            fn write(&self, w: &mut $crate::Writer) -> $crate::Result<()> {
                $( $crate::impl_record!(@write self, w, $f $(: $kind $(<$cty>)?)?); )+
                Ok(())
            }

            fn read(&mut self, r: &mut $crate::Reader<'_>) -> $crate::Result<()> {
                $( $crate::impl_record!(@read self, r, $f $(: $kind $(<$cty>)?)?); )+
                $( $crate::impl_record!(@check self, $f $(: $kind $(<$cty>)?)?); )+
                Ok(())
            }

            fn describe_fields(&self, out: &mut dyn ::core::fmt::Write) -> ::core::fmt::Result {
                $( $crate::impl_record!(@describe self, out, $f $(: $kind $(<$cty>)?)?); )+
                Ok(())
            }

            fn hash_fields(&self, state: &mut dyn ::core::hash::Hasher) {
                $( $crate::impl_record!(@hash self, state, $f $(: $kind $(<$cty>)?)?); )+
            }
        }

        // Floats compare by bit pattern, matching `hash_fields`.
        impl ::core::cmp::PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                true $( && $crate::impl_record!(@eq self, other, $f $(: $kind $(<$cty>)?)?) )+
            }
        }

        impl ::core::hash::Hash for $name {
            fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                $crate::Record::hash_fields(self, state)
            }
        }
    };
}

/// Declares a sub-record: a plain struct plus its wire layout.
///
/// Without a `layout` block the struct's field order is the wire order.
///
/// ```
/// dis_codec::dis_record! {
///     /// Two-axis offset.
///     pub struct Offset {
///         pub x: i16,
///         pub y: i16,
///     }
/// }
///
/// use dis_codec::Record;
/// assert_eq!(Offset { x: 1, y: -1 }.encoded_size(), 4);
/// ```
#[macro_export]
macro_rules! dis_record {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),+ $(,)?
        }
    ) => {
        $crate::dis_record! {
            $(#[$meta])*
            $vis struct $name {
                $( $(#[$fmeta])* $fvis $field : $fty ),+
            }
            layout { $( $field ),+ }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),+ $(,)?
        }
        layout { $($layout:tt)+ }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Default, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            $( $(#[$fmeta])* $fvis $field : $fty ),+
        }

        $crate::impl_record!($name { $($layout)+ });
    };
}

/// Declares a protocol family record: the common header followed by the
/// fields shared by every PDU of the family.
///
/// The generated `Default` stamps the family discriminant into the header.
#[macro_export]
macro_rules! dis_family {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident = $family:path {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            pub header: $crate::PduHeader,
            $( $(#[$fmeta])* $fvis $field : $fty ),*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                Self {
                    header: $crate::PduHeader {
                        protocol_family: $family as u8,
                        ..::core::default::Default::default()
                    },
                    $( $field: ::core::default::Default::default() ),*
                }
            }
        }

        impl $crate::PduFamily for $name {
            const PROTOCOL_FAMILY: $crate::ProtocolFamily = $family;

            fn header(&self) -> &$crate::PduHeader {
                &self.header
            }

            fn header_mut(&mut self) -> &mut $crate::PduHeader {
                &mut self.header
            }
        }

        $crate::impl_record!($name { header $(, $field)* });
    };
}

/// Declares a leaf PDU on top of a family record.
///
/// The family record becomes the leading `base` field; the generated
/// `Default` stamps both the family and the PDU type into the header.
#[macro_export]
macro_rules! dis_pdu {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $base:ty = $pdu_type:path {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
    ) => {
        $crate::dis_pdu! {
            $(#[$meta])*
            $vis struct $name : $base = $pdu_type {
                $( $(#[$fmeta])* $fvis $field : $fty ),*
            }
            layout { $( $field ),* }
        }
    };
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $base:ty = $pdu_type:path {
            $( $(#[$fmeta:meta])* $fvis:vis $field:ident : $fty:ty ),* $(,)?
        }
        layout { $($layout:tt)* }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, ::serde::Serialize, ::serde::Deserialize)]
        $vis struct $name {
            pub base: $base,
            $( $(#[$fmeta])* $fvis $field : $fty ),*
        }

        impl ::core::default::Default for $name {
            fn default() -> Self {
                let mut base = <$base as ::core::default::Default>::default();
                $crate::PduFamily::header_mut(&mut base).pdu_type = $pdu_type as u8;
                Self {
                    base,
                    $( $field: ::core::default::Default::default() ),*
                }
            }
        }

        impl $crate::Pdu for $name {
            const PDU_TYPE: $crate::PduType = $pdu_type;
            const PROTOCOL_FAMILY: $crate::ProtocolFamily =
                <$base as $crate::PduFamily>::PROTOCOL_FAMILY;

            fn header(&self) -> &$crate::PduHeader {
                $crate::PduFamily::header(&self.base)
            }

            fn header_mut(&mut self) -> &mut $crate::PduHeader {
                $crate::PduFamily::header_mut(&mut self.base)
            }
        }

        $crate::impl_record!($name { base, $($layout)* });
    };
}
