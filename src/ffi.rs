//! Raw FreeType 2 declarations.
//!
//! Only the subset of the API surface the safe wrappers forward to, plus the
//! struct fields they read. Layouts follow the FreeType 2 headers; fields the
//! wrappers never touch are typed as opaque pointers.

#![allow(non_camel_case_types)]
#![allow(non_snake_case)]
#![allow(dead_code)]

use libc::{c_char, c_int, c_long, c_short, c_uchar, c_uint, c_ulong, c_ushort, c_void};

pub type FT_Byte = c_uchar;
pub type FT_Bool = c_uchar;
pub type FT_Short = c_short;
pub type FT_UShort = c_ushort;
pub type FT_Int = c_int;
pub type FT_UInt = c_uint;
pub type FT_Int32 = c_int;
pub type FT_Long = c_long;
pub type FT_ULong = c_ulong;
pub type FT_Pos = c_long;
pub type FT_Fixed = c_long;
pub type FT_F26Dot6 = c_long;
pub type FT_String = c_char;
pub type FT_Error = c_int;

pub type FT_Library = *mut c_void;
pub type FT_Stroker = *mut c_void;

#[repr(C)]
#[derive(Clone, Copy, Debug, Default)]
pub struct FT_Vector {
    pub x: FT_Pos,
    pub y: FT_Pos,
}

#[repr(C)]
pub struct FT_BBox {
    pub xMin: FT_Pos,
    pub yMin: FT_Pos,
    pub xMax: FT_Pos,
    pub yMax: FT_Pos,
}

#[repr(C)]
pub struct FT_Generic {
    pub data: *mut c_void,
    pub finalizer: *mut c_void,
}

#[repr(C)]
pub struct FT_ListRec {
    pub head: *mut c_void,
    pub tail: *mut c_void,
}

#[repr(C)]
pub struct FT_Bitmap {
    pub rows: c_uint,
    pub width: c_uint,
    pub pitch: c_int,
    pub buffer: *mut c_uchar,
    pub num_grays: c_ushort,
    pub pixel_mode: c_uchar,
    pub palette_mode: c_uchar,
    pub palette: *mut c_void,
}

#[repr(C)]
pub struct FT_Outline {
    pub n_contours: c_ushort,
    pub n_points: c_ushort,
    pub points: *mut FT_Vector,
    pub tags: *mut c_uchar,
    pub contours: *mut c_ushort,
    pub flags: c_int,
}

#[repr(C)]
pub struct FT_Glyph_Metrics {
    pub width: FT_Pos,
    pub height: FT_Pos,
    pub horiBearingX: FT_Pos,
    pub horiBearingY: FT_Pos,
    pub horiAdvance: FT_Pos,
    pub vertBearingX: FT_Pos,
    pub vertBearingY: FT_Pos,
    pub vertAdvance: FT_Pos,
}

#[repr(C)]
pub struct FT_Bitmap_Size {
    pub height: FT_Short,
    pub width: FT_Short,
    pub size: FT_Pos,
    pub x_ppem: FT_Pos,
    pub y_ppem: FT_Pos,
}

pub type FT_Face = *mut FT_FaceRec;
pub type FT_GlyphSlot = *mut FT_GlyphSlotRec;

#[repr(C)]
pub struct FT_FaceRec {
    pub num_faces: FT_Long,
    pub face_index: FT_Long,
    pub face_flags: FT_Long,
    pub style_flags: FT_Long,
    pub num_glyphs: FT_Long,
    pub family_name: *mut FT_String,
    pub style_name: *mut FT_String,
    pub num_fixed_sizes: FT_Int,
    pub available_sizes: *mut FT_Bitmap_Size,
    pub num_charmaps: FT_Int,
    pub charmaps: *mut *mut c_void,
    pub generic: FT_Generic,
    pub bbox: FT_BBox,
    pub units_per_EM: FT_UShort,
    pub ascender: FT_Short,
    pub descender: FT_Short,
    pub height: FT_Short,
    pub max_advance_width: FT_Short,
    pub max_advance_height: FT_Short,
    pub underline_position: FT_Short,
    pub underline_thickness: FT_Short,
    pub glyph: FT_GlyphSlot,
    pub size: *mut c_void,
    pub charmap: *mut c_void,
    pub driver: *mut c_void,
    pub memory: *mut c_void,
    pub stream: *mut c_void,
    pub sizes_list: FT_ListRec,
    pub autohint: FT_Generic,
    pub extensions: *mut c_void,
    pub internal: *mut c_void,
}

#[repr(C)]
pub struct FT_GlyphSlotRec {
    pub library: FT_Library,
    pub face: FT_Face,
    pub next: FT_GlyphSlot,
    pub glyph_index: FT_UInt,
    pub generic: FT_Generic,
    pub metrics: FT_Glyph_Metrics,
    pub linearHoriAdvance: FT_Fixed,
    pub linearVertAdvance: FT_Fixed,
    pub advance: FT_Vector,
    pub format: FT_Glyph_Format,
    pub bitmap: FT_Bitmap,
    pub bitmap_left: FT_Int,
    pub bitmap_top: FT_Int,
    pub outline: FT_Outline,
    pub num_subglyphs: FT_UInt,
    pub subglyphs: *mut c_void,
    pub control_data: *mut c_void,
    pub control_len: c_long,
    pub lsb_delta: FT_Pos,
    pub rsb_delta: FT_Pos,
    pub other: *mut c_void,
    pub internal: *mut c_void,
}

// Glyph management (ftglyph.h). FT_Glyph is the independently owned copy of
// a glyph slot; a bitmap-format glyph can be downcast to FT_BitmapGlyph.

pub type FT_Glyph = *mut FT_GlyphRec;
pub type FT_BitmapGlyph = *mut FT_BitmapGlyphRec;

#[repr(C)]
pub struct FT_GlyphRec {
    pub library: FT_Library,
    pub clazz: *const c_void,
    pub format: FT_Glyph_Format,
    pub advance: FT_Vector, // 16.16 fixed point, unlike the slot's 26.6
}

#[repr(C)]
pub struct FT_BitmapGlyphRec {
    pub root: FT_GlyphRec,
    pub left: FT_Int,
    pub top: FT_Int,
    pub bitmap: FT_Bitmap,
}

pub type FT_Glyph_Format = c_uint;
pub const FT_GLYPH_FORMAT_NONE: FT_Glyph_Format = 0;
pub const FT_GLYPH_FORMAT_COMPOSITE: FT_Glyph_Format = 1668246896;
pub const FT_GLYPH_FORMAT_BITMAP: FT_Glyph_Format = 1651078259;
pub const FT_GLYPH_FORMAT_OUTLINE: FT_Glyph_Format = 1869968492;

pub type FT_Pixel_Mode = c_uchar;
pub const FT_PIXEL_MODE_NONE: FT_Pixel_Mode = 0;
pub const FT_PIXEL_MODE_MONO: FT_Pixel_Mode = 1;
pub const FT_PIXEL_MODE_GRAY: FT_Pixel_Mode = 2;

pub type FT_Render_Mode = c_uint;
pub const FT_RENDER_MODE_NORMAL: FT_Render_Mode = 0;
pub const FT_RENDER_MODE_LIGHT: FT_Render_Mode = 1;
pub const FT_RENDER_MODE_MONO: FT_Render_Mode = 2;

pub type FT_Kerning_Mode = c_uint;
pub const FT_KERNING_DEFAULT: FT_Kerning_Mode = 0;
pub const FT_KERNING_UNFITTED: FT_Kerning_Mode = 1;
pub const FT_KERNING_UNSCALED: FT_Kerning_Mode = 2;

pub type FT_Stroker_LineCap = c_uint;
pub const FT_STROKER_LINECAP_BUTT: FT_Stroker_LineCap = 0;
pub const FT_STROKER_LINECAP_ROUND: FT_Stroker_LineCap = 1;
pub const FT_STROKER_LINECAP_SQUARE: FT_Stroker_LineCap = 2;

pub type FT_Stroker_LineJoin = c_uint;
pub const FT_STROKER_LINEJOIN_ROUND: FT_Stroker_LineJoin = 0;
pub const FT_STROKER_LINEJOIN_BEVEL: FT_Stroker_LineJoin = 1;
pub const FT_STROKER_LINEJOIN_MITER_VARIABLE: FT_Stroker_LineJoin = 2;
pub const FT_STROKER_LINEJOIN_MITER_FIXED: FT_Stroker_LineJoin = 3;

pub const FT_LOAD_DEFAULT: FT_Int32 = 0x0;
pub const FT_LOAD_NO_SCALE: FT_Int32 = 0x1 << 0;
pub const FT_LOAD_NO_HINTING: FT_Int32 = 0x1 << 1;
pub const FT_LOAD_RENDER: FT_Int32 = 0x1 << 2;
pub const FT_LOAD_NO_BITMAP: FT_Int32 = 0x1 << 3;
pub const FT_LOAD_MONOCHROME: FT_Int32 = 0x1 << 12;

pub const FT_FACE_FLAG_SCALABLE: FT_Long = 1 << 0;
pub const FT_FACE_FLAG_FIXED_SIZES: FT_Long = 1 << 1;
pub const FT_FACE_FLAG_HORIZONTAL: FT_Long = 1 << 4;
pub const FT_FACE_FLAG_KERNING: FT_Long = 1 << 6;

pub const FT_Err_Ok: FT_Error = 0;
pub const FT_Err_Cannot_Open_Resource: FT_Error = 1;
pub const FT_Err_Unknown_File_Format: FT_Error = 2;
pub const FT_Err_Invalid_Argument: FT_Error = 6;
pub const FT_Err_Unimplemented_Feature: FT_Error = 7;
pub const FT_Err_Invalid_Glyph_Index: FT_Error = 16;
pub const FT_Err_Invalid_Glyph_Format: FT_Error = 18;
pub const FT_Err_Cannot_Render_Glyph: FT_Error = 19;
pub const FT_Err_Invalid_Handle: FT_Error = 32;
pub const FT_Err_Out_Of_Memory: FT_Error = 64;

#[link(name = "freetype")]
extern "C" {
    pub fn FT_Init_FreeType(alibrary: *mut FT_Library) -> FT_Error;
    pub fn FT_Done_FreeType(library: FT_Library) -> FT_Error;
    pub fn FT_Library_Version(
        library: FT_Library,
        amajor: *mut FT_Int,
        aminor: *mut FT_Int,
        apatch: *mut FT_Int,
    );

    pub fn FT_New_Face(
        library: FT_Library,
        filepathname: *const c_char,
        face_index: FT_Long,
        aface: *mut FT_Face,
    ) -> FT_Error;
    pub fn FT_Done_Face(face: FT_Face) -> FT_Error;

    pub fn FT_Set_Char_Size(
        face: FT_Face,
        char_width: FT_F26Dot6,
        char_height: FT_F26Dot6,
        horz_resolution: FT_UInt,
        vert_resolution: FT_UInt,
    ) -> FT_Error;

    pub fn FT_Get_Char_Index(face: FT_Face, charcode: FT_ULong) -> FT_UInt;
    pub fn FT_Load_Glyph(face: FT_Face, glyph_index: FT_UInt, load_flags: FT_Int32) -> FT_Error;

    pub fn FT_Get_Kerning(
        face: FT_Face,
        left_glyph: FT_UInt,
        right_glyph: FT_UInt,
        kern_mode: FT_UInt,
        akerning: *mut FT_Vector,
    ) -> FT_Error;

    pub fn FT_Get_Glyph(slot: FT_GlyphSlot, aglyph: *mut FT_Glyph) -> FT_Error;
    pub fn FT_Done_Glyph(glyph: FT_Glyph);
    pub fn FT_Glyph_Stroke(pglyph: *mut FT_Glyph, stroker: FT_Stroker, destroy: FT_Bool)
        -> FT_Error;
    pub fn FT_Glyph_To_Bitmap(
        the_glyph: *mut FT_Glyph,
        render_mode: FT_Render_Mode,
        origin: *const FT_Vector,
        destroy: FT_Bool,
    ) -> FT_Error;

    pub fn FT_Stroker_New(library: FT_Library, astroker: *mut FT_Stroker) -> FT_Error;
    pub fn FT_Stroker_Set(
        stroker: FT_Stroker,
        radius: FT_Fixed,
        line_cap: FT_Stroker_LineCap,
        line_join: FT_Stroker_LineJoin,
        miter_limit: FT_Fixed,
    );
    pub fn FT_Stroker_Done(stroker: FT_Stroker);
}
