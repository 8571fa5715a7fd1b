use cosmic::widget::icon::Handle;

// embedded SVG bytes
#[cfg(not(feature = "xdg_icons"))]
mod inner {
    use cosmic::widget::icon::{self, Handle};

    const ICON_ATTACH: &[u8] =
        include_bytes!("../resources/icons/mono/scalable/mail-attachment-symbolic.svg");
    const ICON_GROW: &[u8] = include_bytes!("../resources/icons/mono/scalable/list-add-symbolic.svg");
    const ICON_SHRINK: &[u8] =
        include_bytes!("../resources/icons/mono/scalable/list-remove-symbolic.svg");
    const ICON_WIDEN: &[u8] = include_bytes!("../resources/icons/mono/scalable/pan-end-symbolic.svg");
    const ICON_NARROW: &[u8] =
        include_bytes!("../resources/icons/mono/scalable/pan-start-symbolic.svg");
    const ICON_PALETTE: &[u8] =
        include_bytes!("../resources/icons/mono/scalable/applications-graphics-symbolic.svg");
    const ICON_CLOSE: &[u8] =
        include_bytes!("../resources/icons/mono/scalable/window-close-symbolic.svg");
    const ICON_SAVE: &[u8] =
        include_bytes!("../resources/icons/mono/scalable/document-save-symbolic.svg");

    pub struct IconSet {
        pub attach: Handle,
        pub grow: Handle,
        pub shrink: Handle,
        pub widen: Handle,
        pub narrow: Handle,
        pub palette: Handle,
        pub close: Handle,
        pub save: Handle,
    }

    impl IconSet {
        pub fn new() -> Self {
            Self {
                attach: icon::from_svg_bytes(ICON_ATTACH),
                grow: icon::from_svg_bytes(ICON_GROW),
                shrink: icon::from_svg_bytes(ICON_SHRINK),
                widen: icon::from_svg_bytes(ICON_WIDEN),
                narrow: icon::from_svg_bytes(ICON_NARROW),
                palette: icon::from_svg_bytes(ICON_PALETTE),
                close: icon::from_svg_bytes(ICON_CLOSE),
                save: icon::from_svg_bytes(ICON_SAVE),
            }
        }
    }
}

// system wide installed icons
#[cfg(feature = "xdg_icons")]
mod inner {
    use cosmic::widget::icon::{self, Handle};

    pub const XDG_ATTACH: &str = "mail-attachment-symbolic";
    pub const XDG_GROW: &str = "list-add-symbolic";
    pub const XDG_SHRINK: &str = "list-remove-symbolic";
    pub const XDG_WIDEN: &str = "pan-end-symbolic";
    pub const XDG_NARROW: &str = "pan-start-symbolic";
    pub const XDG_PALETTE: &str = "applications-graphics-symbolic";
    pub const XDG_CLOSE: &str = "window-close-symbolic";
    pub const XDG_SAVE: &str = "document-save-symbolic";

    pub struct IconSet {
        pub attach: Handle,
        pub grow: Handle,
        pub shrink: Handle,
        pub widen: Handle,
        pub narrow: Handle,
        pub palette: Handle,
        pub close: Handle,
        pub save: Handle,
    }

    impl IconSet {
        pub fn new() -> Self {
            Self {
                attach: icon::from_name(XDG_ATTACH).into(),
                grow: icon::from_name(XDG_GROW).into(),
                shrink: icon::from_name(XDG_SHRINK).into(),
                widen: icon::from_name(XDG_WIDEN).into(),
                narrow: icon::from_name(XDG_NARROW).into(),
                palette: icon::from_name(XDG_PALETTE).into(),
                close: icon::from_name(XDG_CLOSE).into(),
                save: icon::from_name(XDG_SAVE).into(),
            }
        }
    }
}

pub struct IconSet {
    inner: inner::IconSet,
}

impl Default for IconSet {
    fn default() -> Self {
        Self::new()
    }
}

impl IconSet {
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: inner::IconSet::new(),
        }
    }

    pub fn attach(&self) -> Handle {
        self.inner.attach.clone()
    }

    pub fn grow(&self) -> Handle {
        self.inner.grow.clone()
    }

    pub fn shrink(&self) -> Handle {
        self.inner.shrink.clone()
    }

    pub fn widen(&self) -> Handle {
        self.inner.widen.clone()
    }

    pub fn narrow(&self) -> Handle {
        self.inner.narrow.clone()
    }

    pub fn palette(&self) -> Handle {
        self.inner.palette.clone()
    }

    pub fn close(&self) -> Handle {
        self.inner.close.clone()
    }

    pub fn save(&self) -> Handle {
        self.inner.save.clone()
    }
}
