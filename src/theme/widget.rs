// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE-APACHE file or at:
//     https://www.apache.org/licenses/LICENSE-2.0

//! Widget classification
//!
//! The toolkit binding maps native widget identity onto the closed
//! [`WidgetKind`] enum; everything the renderer needs to know about a kind
//! beyond that is data, looked up once per render call through
//! [`WidgetKind::traits`]. Widget-specific exceptions live in that table,
//! not in control flow.

use super::palette::Bucket;
use crate::draw::CornerMask;
use crate::geom::Rect;

/// Kind of widget being rendered
///
/// This is a closed set: kinds with no dedicated appearance rules use
/// [`WidgetKind::Other`], which renders like a plain frame.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Ord, PartialOrd, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WidgetKind {
    PushButton,
    DefaultButton,
    ToolButton,
    CheckBox,
    RadioButton,
    ComboBox,
    ComboButton,
    Entry,
    SpinUp,
    SpinDown,
    SliderTrack,
    SliderThumb,
    Dial,
    ScrollBarTrack,
    ScrollBarThumb,
    ScrollBarButton,
    ProgressTrough,
    ProgressFill,
    TabTop,
    TabBottom,
    TabLeft,
    TabRight,
    TabFrame,
    Frame,
    GroupBox,
    MenuBar,
    MenuBarItem,
    Menu,
    MenuItem,
    Tooltip,
    Toolbar,
    ListHeader,
    ListRow,
    Splitter,
    GripHandle,
    Expander,
    StatusBar,
    Sidebar,
    TitleBar,
    Other,
}

/// Interaction state of the widget being rendered
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum InteractionState {
    #[default]
    Normal,
    /// Depressed / being activated
    Active,
    /// Under the pointer
    Prelight,
    /// Selected (e.g. the active tab, a selected row)
    Selected,
    /// Disabled
    Insensitive,
}

impl InteractionState {
    /// True for the disabled state
    #[inline]
    pub fn is_insensitive(self) -> bool {
        self == InteractionState::Insensitive
    }
}

/// Qualitative style of a widget's outer border
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BorderProfile {
    Flat,
    #[default]
    Raised,
    Sunken,
    Light,
}

bitflags! {
    /// Per-request rendering flags
    #[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
    pub struct RenderFlags: u8 {
        /// Render the sunken variant
        const SUNKEN = 1 << 0;
        /// Draw the outer border stroke
        const DO_BORDER = 1 << 1;
        /// Gradient axis is vertical
        const VERTICAL = 1 << 2;
        /// Blend the background fill into the surrounding colour
        const BLEND = 1 << 3;
        /// Draw inside the border rather than over it
        const DRAW_INSIDE = 1 << 4;
        /// Widget has keyboard focus
        const HAS_FOCUS = 1 << 5;
        /// Suppress the etch/glow overlay
        const HIDE_EFFECT = 1 << 6;
    }
}

/// Standalone decoration drawn over a widget's fill
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Decoration {
    #[default]
    None,
    /// Repeating dot pattern (grip handles)
    Dots,
    /// Etched dash group (splitters, slider thumbs)
    Dashes,
}

/// Per-kind behaviour, consulted once per render call
///
/// One row of the widget behaviour table; see [`WidgetKind::traits`].
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KindTraits {
    /// Bevel relief applies (the kind is button-shaped)
    pub uses_bevel: bool,
    /// Stage 3 may draw an inner highlight stroke
    pub inner_highlight: bool,
    /// Never draw the bottom-right relief stroke
    pub skip_bottom_relief: bool,
    /// The etch/glow overlay may apply to this kind
    pub etch: bool,
    /// Stage 4: elliptical shine highlight (circular widgets)
    pub shine_overlay: bool,
    /// Stage 4: coloured mouse-over segment overlays
    pub mouse_over_segments: bool,
    /// Sunken borders use the two-pass fake-depth stroke
    pub frame_like: bool,
    /// A real push-button (bevelled appearance is honoured)
    pub button_like: bool,
    /// A list/tree header cell
    pub list_header: bool,
    /// Hosted on a toolbar (resolves to the toolbar appearance)
    pub on_toolbar: bool,
    /// Gradient stop positions are mirrored (`1 − pos`)
    pub mirror_gradient: bool,
    /// The outer border stroke is drawn without an explicit request
    pub bordered: bool,
    /// Decoration drawn over the fill
    pub decoration: Decoration,
    /// Palette bucket colouring this kind
    pub bucket: Bucket,
}

impl KindTraits {
    /// Default row: renders like a plain frame
    const FRAME: KindTraits = KindTraits {
        uses_bevel: false,
        inner_highlight: false,
        skip_bottom_relief: false,
        etch: false,
        shine_overlay: false,
        mouse_over_segments: false,
        frame_like: true,
        button_like: false,
        list_header: false,
        on_toolbar: false,
        mirror_gradient: false,
        bordered: true,
        decoration: Decoration::None,
        bucket: Bucket::Background,
    };

    /// Base row for button-shaped widgets
    const BUTTON: KindTraits = KindTraits {
        uses_bevel: true,
        inner_highlight: true,
        etch: true,
        frame_like: false,
        button_like: true,
        mouse_over_segments: true,
        bucket: Bucket::Button,
        ..Self::FRAME
    };
}

impl WidgetKind {
    /// Look up the behaviour row for this kind
    pub const fn traits(self) -> KindTraits {
        use WidgetKind::*;
        match self {
            PushButton | DefaultButton | ComboButton => KindTraits::BUTTON,
            ToolButton => KindTraits {
                on_toolbar: true,
                etch: false,
                ..KindTraits::BUTTON
            },
            ComboBox => KindTraits {
                button_like: false,
                ..KindTraits::BUTTON
            },
            CheckBox => KindTraits {
                skip_bottom_relief: true,
                button_like: false,
                mouse_over_segments: false,
                bucket: Bucket::Check,
                ..KindTraits::BUTTON
            },
            RadioButton => KindTraits {
                skip_bottom_relief: true,
                button_like: false,
                mouse_over_segments: false,
                shine_overlay: true,
                bucket: Bucket::Check,
                ..KindTraits::BUTTON
            },
            Entry => KindTraits {
                uses_bevel: false,
                button_like: false,
                mouse_over_segments: false,
                inner_highlight: false,
                ..KindTraits::BUTTON
            },
            SpinUp | SpinDown => KindTraits {
                button_like: false,
                mouse_over_segments: false,
                ..KindTraits::BUTTON
            },
            SliderTrack => KindTraits {
                uses_bevel: false,
                bucket: Bucket::Slider,
                ..KindTraits::FRAME
            },
            SliderThumb => KindTraits {
                button_like: false,
                decoration: Decoration::Dashes,
                bucket: Bucket::Slider,
                ..KindTraits::BUTTON
            },
            Dial => KindTraits {
                button_like: false,
                mouse_over_segments: false,
                shine_overlay: true,
                bucket: Bucket::Slider,
                ..KindTraits::BUTTON
            },
            ScrollBarThumb | ScrollBarButton => KindTraits {
                button_like: false,
                bucket: Bucket::Slider,
                ..KindTraits::BUTTON
            },
            ScrollBarTrack => KindTraits {
                bucket: Bucket::Slider,
                ..KindTraits::FRAME
            },
            ProgressTrough => KindTraits::FRAME,
            ProgressFill => KindTraits {
                uses_bevel: false,
                inner_highlight: true,
                frame_like: false,
                // the border is the border-progress option's business
                bordered: false,
                bucket: Bucket::Progress,
                ..KindTraits::FRAME
            },
            TabTop | TabLeft => KindTraits {
                uses_bevel: false,
                button_like: false,
                mouse_over_segments: false,
                inner_highlight: true,
                ..KindTraits::BUTTON
            },
            TabBottom | TabRight => KindTraits {
                mirror_gradient: true,
                uses_bevel: false,
                button_like: false,
                mouse_over_segments: false,
                inner_highlight: true,
                ..KindTraits::BUTTON
            },
            TabFrame | Frame | GroupBox => KindTraits::FRAME,
            MenuBar | Toolbar | StatusBar | TitleBar => KindTraits {
                on_toolbar: true,
                ..KindTraits::FRAME
            },
            MenuBarItem => KindTraits {
                etch: false,
                mouse_over_segments: false,
                button_like: false,
                bordered: false,
                ..KindTraits::BUTTON
            },
            Menu => KindTraits {
                frame_like: false,
                bucket: Bucket::Menu,
                ..KindTraits::FRAME
            },
            MenuItem => KindTraits {
                frame_like: false,
                bordered: false,
                bucket: Bucket::Menu,
                ..KindTraits::FRAME
            },
            Tooltip => KindTraits {
                bucket: Bucket::Tooltip,
                ..KindTraits::FRAME
            },
            ListHeader => KindTraits {
                list_header: true,
                button_like: false,
                mouse_over_segments: false,
                etch: false,
                ..KindTraits::BUTTON
            },
            ListRow => KindTraits {
                frame_like: false,
                bordered: false,
                bucket: Bucket::Selected,
                ..KindTraits::FRAME
            },
            Splitter => KindTraits {
                decoration: Decoration::Dashes,
                ..KindTraits::FRAME
            },
            GripHandle => KindTraits {
                decoration: Decoration::Dots,
                ..KindTraits::FRAME
            },
            Expander => KindTraits::FRAME,
            Sidebar => KindTraits {
                bucket: Bucket::Sidebar,
                ..KindTraits::FRAME
            },
            Other => KindTraits::FRAME,
        }
    }
}

/// A single render request
///
/// Constructed per draw call by the toolkit binding and discarded after
/// use; owns no resources.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderRequest {
    pub kind: WidgetKind,
    pub state: InteractionState,
    pub profile: BorderProfile,
    pub corners: CornerMask,
    /// Widget geometry in integer pixels
    pub rect: Rect,
    /// Optional dirty-region clip
    pub clip: Option<Rect>,
    /// Rectangular gap XOR-cut out of the border (where a tab attaches)
    pub gap: Option<Rect>,
    /// Palette bucket override; `None` uses the kind's own bucket
    pub bucket: Option<Bucket>,
    /// Multiplied into the alpha of every emitted colour
    pub alpha: f32,
    pub flags: RenderFlags,
}

impl RenderRequest {
    /// Construct with defaults: raised profile, all corners, opaque
    pub fn new(kind: WidgetKind, state: InteractionState, rect: Rect) -> Self {
        RenderRequest {
            kind,
            state,
            profile: BorderProfile::default(),
            corners: CornerMask::ALL,
            rect,
            clip: None,
            gap: None,
            bucket: None,
            alpha: 1.0,
            flags: RenderFlags::DO_BORDER,
        }
    }

    /// Effective palette bucket
    #[inline]
    pub fn bucket(&self) -> Bucket {
        self.bucket.unwrap_or(self.kind.traits().bucket)
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn checkbox_skips_bottom_relief() {
        assert!(WidgetKind::CheckBox.traits().skip_bottom_relief);
        assert!(WidgetKind::RadioButton.traits().skip_bottom_relief);
        assert!(!WidgetKind::PushButton.traits().skip_bottom_relief);
    }

    #[test]
    fn only_buttons_and_headers_take_bevel() {
        for kind in [
            WidgetKind::PushButton,
            WidgetKind::DefaultButton,
            WidgetKind::ComboButton,
        ] {
            assert!(kind.traits().button_like);
        }
        assert!(WidgetKind::ListHeader.traits().list_header);
        assert!(!WidgetKind::Entry.traits().button_like);
        assert!(!WidgetKind::Frame.traits().button_like);
    }

    #[test]
    fn bottom_tabs_mirror() {
        assert!(WidgetKind::TabBottom.traits().mirror_gradient);
        assert!(WidgetKind::TabRight.traits().mirror_gradient);
        assert!(!WidgetKind::TabTop.traits().mirror_gradient);
    }

    #[test]
    fn borderless_kinds() {
        for kind in [
            WidgetKind::MenuItem,
            WidgetKind::MenuBarItem,
            WidgetKind::ListRow,
            WidgetKind::ProgressFill,
        ] {
            assert!(!kind.traits().bordered, "{kind:?}");
        }
        assert!(WidgetKind::Menu.traits().bordered);
        assert!(WidgetKind::Frame.traits().bordered);
    }

    #[test]
    fn decorations() {
        assert_eq!(WidgetKind::GripHandle.traits().decoration, Decoration::Dots);
        assert_eq!(WidgetKind::Splitter.traits().decoration, Decoration::Dashes);
        assert_eq!(
            WidgetKind::SliderThumb.traits().decoration,
            Decoration::Dashes
        );
        assert_eq!(WidgetKind::Expander.traits().decoration, Decoration::None);
    }

    #[test]
    fn bucket_override() {
        let mut req = RenderRequest::new(
            WidgetKind::PushButton,
            InteractionState::Normal,
            Rect::xywh(0, 0, 10, 10),
        );
        assert_eq!(req.bucket(), Bucket::Button);
        req.bucket = Some(Bucket::Highlight);
        assert_eq!(req.bucket(), Bucket::Highlight);
    }
}
