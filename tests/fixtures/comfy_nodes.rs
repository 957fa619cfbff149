//! Typed node bindings generated by nodebind.
//!
//! Do not edit by hand. Regenerate from the host registry instead.

#![allow(non_camel_case_types, non_snake_case, dead_code, unused_imports, clippy::all)]

use nodebind::graph::{
    GraphError, Input, InputHandle, InputValue, Node, Output, OutputHandle, Scope, SlotKey,
};
use nodebind::types::SlotType;

/// Slot types known to this binding set.
pub mod types {
    pub use nodebind::types::{Any, BOOLEAN, FLOAT, INT, STRING};

    nodebind::nominal_type!(pub MODEL, "MODEL");
    nodebind::nominal_type!(pub CLIP, "CLIP");
    nodebind::nominal_type!(pub VAE, "VAE");
    nodebind::nominal_type!(pub CONDITIONING, "CONDITIONING");
    nodebind::nominal_type!(pub LATENT, "LATENT");
    nodebind::nominal_type!(pub IMAGE, "IMAGE");
    nodebind::choice_type!(pub CheckpointLoaderSimple_ckpt_name {
        model_safetensors => "model.safetensors",
        sdxl_base_safetensors => "sdxl-base.safetensors",
    });
    nodebind::choice_type!(pub KSampler_sampler_name {
        euler => "euler",
        dpmpp_2m => "dpmpp_2m",
    });
}

/// Builder for `CheckpointLoaderSimple`.
pub struct CheckpointLoaderSimple_0000 {
    node: Node,
}

impl CheckpointLoaderSimple_0000 {
    pub const TYPE_NAME: &'static str = "CheckpointLoaderSimple";
    pub const INPUT_LENGTH: usize = 1;
    pub const OUTPUT_LENGTH: usize = 3;

    pub fn new() -> Self {
        let node = Node::new(Self::TYPE_NAME);
        node.register_input("ckpt_name", <types::CheckpointLoaderSimple_ckpt_name as SlotType>::value_type(), InputValue::PendingLink);
        node.register_output(Some("MODEL"), <types::MODEL as SlotType>::value_type());
        node.register_output(Some("CLIP"), <types::CLIP as SlotType>::value_type());
        node.register_output(Some("VAE"), <types::VAE as SlotType>::value_type());
        Self { node }
    }

    /// Creates the node and registers it with `scope`.
    pub fn new_in(scope: &mut Scope<'_>) -> Self {
        let this = Self::new();
        scope.add(&this);
        this
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn with_ckpt_name(self, value: impl Into<<types::CheckpointLoaderSimple_ckpt_name as SlotType>::Literal>) -> Self {
        let value: <types::CheckpointLoaderSimple_ckpt_name as SlotType>::Literal = value.into();
        self.node.bind_value(0, InputValue::literal(value));
        self
    }

    pub fn in_0(&self) -> Input<types::CheckpointLoaderSimple_ckpt_name> {
        Input::new(&self.node, 0)
    }

    pub fn in_ckpt_name(&self) -> Input<types::CheckpointLoaderSimple_ckpt_name> {
        Input::new(&self.node, 0)
    }

    pub fn input(&self, key: impl Into<SlotKey>) -> Result<InputHandle, GraphError> {
        self.node.input(key)
    }

    pub fn out_0(&self) -> Output<types::MODEL> {
        Output::new(&self.node, 0)
    }

    pub fn out_MODEL(&self) -> Output<types::MODEL> {
        Output::new(&self.node, 0)
    }

    pub fn out_1(&self) -> Output<types::CLIP> {
        Output::new(&self.node, 1)
    }

    pub fn out_CLIP(&self) -> Output<types::CLIP> {
        Output::new(&self.node, 1)
    }

    pub fn out_2(&self) -> Output<types::VAE> {
        Output::new(&self.node, 2)
    }

    pub fn out_VAE(&self) -> Output<types::VAE> {
        Output::new(&self.node, 2)
    }

    pub fn output(&self, key: impl Into<SlotKey>) -> Result<OutputHandle, GraphError> {
        self.node.output(key)
    }
}

impl Default for CheckpointLoaderSimple_0000 {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Node> for CheckpointLoaderSimple_0000 {
    fn as_ref(&self) -> &Node {
        &self.node
    }
}

/// Builder for `CLIPTextEncode`.
pub struct CLIPTextEncode_0001 {
    node: Node,
}

impl CLIPTextEncode_0001 {
    pub const TYPE_NAME: &'static str = "CLIPTextEncode";
    pub const INPUT_LENGTH: usize = 2;
    pub const OUTPUT_LENGTH: usize = 1;

    pub fn new() -> Self {
        let node = Node::new(Self::TYPE_NAME);
        node.register_input("text", <types::STRING as SlotType>::value_type(), InputValue::PendingLink);
        node.register_input("clip", <types::CLIP as SlotType>::value_type(), InputValue::PendingLink);
        node.register_output(Some("CONDITIONING"), <types::CONDITIONING as SlotType>::value_type());
        Self { node }
    }

    /// Creates the node and registers it with `scope`.
    pub fn new_in(scope: &mut Scope<'_>) -> Self {
        let this = Self::new();
        scope.add(&this);
        this
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn with_text(self, value: impl Into<<types::STRING as SlotType>::Literal>) -> Self {
        let value: <types::STRING as SlotType>::Literal = value.into();
        self.node.bind_value(0, InputValue::literal(value));
        self
    }

    pub fn with_clip(self, value: impl Into<<types::CLIP as SlotType>::Literal>) -> Self {
        let value: <types::CLIP as SlotType>::Literal = value.into();
        self.node.bind_value(1, InputValue::literal(value));
        self
    }

    pub fn in_0(&self) -> Input<types::STRING> {
        Input::new(&self.node, 0)
    }

    pub fn in_text(&self) -> Input<types::STRING> {
        Input::new(&self.node, 0)
    }

    pub fn in_1(&self) -> Input<types::CLIP> {
        Input::new(&self.node, 1)
    }

    pub fn in_clip(&self) -> Input<types::CLIP> {
        Input::new(&self.node, 1)
    }

    pub fn input(&self, key: impl Into<SlotKey>) -> Result<InputHandle, GraphError> {
        self.node.input(key)
    }

    pub fn out_0(&self) -> Output<types::CONDITIONING> {
        Output::new(&self.node, 0)
    }

    pub fn out_CONDITIONING(&self) -> Output<types::CONDITIONING> {
        Output::new(&self.node, 0)
    }

    pub fn output(&self, key: impl Into<SlotKey>) -> Result<OutputHandle, GraphError> {
        self.node.output(key)
    }
}

impl Default for CLIPTextEncode_0001 {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Node> for CLIPTextEncode_0001 {
    fn as_ref(&self) -> &Node {
        &self.node
    }
}

/// Builder for `EmptyLatentImage`.
pub struct EmptyLatentImage_0002 {
    node: Node,
}

impl EmptyLatentImage_0002 {
    pub const TYPE_NAME: &'static str = "EmptyLatentImage";
    pub const INPUT_LENGTH: usize = 3;
    pub const OUTPUT_LENGTH: usize = 1;

    pub fn new() -> Self {
        let node = Node::new(Self::TYPE_NAME);
        node.register_input("width", <types::INT as SlotType>::value_type(), InputValue::literal(512_i64));
        node.register_input("height", <types::INT as SlotType>::value_type(), InputValue::literal(512_i64));
        node.register_input("batch_size", <types::INT as SlotType>::value_type(), InputValue::literal(1_i64));
        node.register_output(Some("LATENT"), <types::LATENT as SlotType>::value_type());
        Self { node }
    }

    /// Creates the node and registers it with `scope`.
    pub fn new_in(scope: &mut Scope<'_>) -> Self {
        let this = Self::new();
        scope.add(&this);
        this
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn with_width(self, value: impl Into<<types::INT as SlotType>::Literal>) -> Self {
        let value: <types::INT as SlotType>::Literal = value.into();
        self.node.bind_value(0, InputValue::literal(value));
        self
    }

    pub fn with_height(self, value: impl Into<<types::INT as SlotType>::Literal>) -> Self {
        let value: <types::INT as SlotType>::Literal = value.into();
        self.node.bind_value(1, InputValue::literal(value));
        self
    }

    pub fn with_batch_size(self, value: impl Into<<types::INT as SlotType>::Literal>) -> Self {
        let value: <types::INT as SlotType>::Literal = value.into();
        self.node.bind_value(2, InputValue::literal(value));
        self
    }

    pub fn in_0(&self) -> Input<types::INT> {
        Input::new(&self.node, 0)
    }

    pub fn in_width(&self) -> Input<types::INT> {
        Input::new(&self.node, 0)
    }

    pub fn in_1(&self) -> Input<types::INT> {
        Input::new(&self.node, 1)
    }

    pub fn in_height(&self) -> Input<types::INT> {
        Input::new(&self.node, 1)
    }

    pub fn in_2(&self) -> Input<types::INT> {
        Input::new(&self.node, 2)
    }

    pub fn in_batch_size(&self) -> Input<types::INT> {
        Input::new(&self.node, 2)
    }

    pub fn input(&self, key: impl Into<SlotKey>) -> Result<InputHandle, GraphError> {
        self.node.input(key)
    }

    pub fn out_0(&self) -> Output<types::LATENT> {
        Output::new(&self.node, 0)
    }

    pub fn out_LATENT(&self) -> Output<types::LATENT> {
        Output::new(&self.node, 0)
    }

    pub fn output(&self, key: impl Into<SlotKey>) -> Result<OutputHandle, GraphError> {
        self.node.output(key)
    }
}

impl Default for EmptyLatentImage_0002 {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Node> for EmptyLatentImage_0002 {
    fn as_ref(&self) -> &Node {
        &self.node
    }
}

/// Builder for `KSampler`.
pub struct KSampler_0003 {
    node: Node,
}

impl KSampler_0003 {
    pub const TYPE_NAME: &'static str = "KSampler";
    pub const INPUT_LENGTH: usize = 6;
    pub const OUTPUT_LENGTH: usize = 1;

    pub fn new() -> Self {
        let node = Node::new(Self::TYPE_NAME);
        node.register_input("model", <types::MODEL as SlotType>::value_type(), InputValue::PendingLink);
        node.register_input("seed", <types::INT as SlotType>::value_type(), InputValue::literal(0_i64));
        node.register_input("sampler_name", <types::KSampler_sampler_name as SlotType>::value_type(), InputValue::literal("euler"));
        node.register_input("positive", <types::CONDITIONING as SlotType>::value_type(), InputValue::PendingLink);
        node.register_input("latent_image", <types::LATENT as SlotType>::value_type(), InputValue::PendingLink);
        node.register_input("denoise", <types::FLOAT as SlotType>::value_type(), InputValue::Omitted);
        node.register_output(Some("LATENT"), <types::LATENT as SlotType>::value_type());
        Self { node }
    }

    /// Creates the node and registers it with `scope`.
    pub fn new_in(scope: &mut Scope<'_>) -> Self {
        let this = Self::new();
        scope.add(&this);
        this
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn with_model(self, value: impl Into<<types::MODEL as SlotType>::Literal>) -> Self {
        let value: <types::MODEL as SlotType>::Literal = value.into();
        self.node.bind_value(0, InputValue::literal(value));
        self
    }

    pub fn with_seed(self, value: impl Into<<types::INT as SlotType>::Literal>) -> Self {
        let value: <types::INT as SlotType>::Literal = value.into();
        self.node.bind_value(1, InputValue::literal(value));
        self
    }

    pub fn with_sampler_name(self, value: impl Into<<types::KSampler_sampler_name as SlotType>::Literal>) -> Self {
        let value: <types::KSampler_sampler_name as SlotType>::Literal = value.into();
        self.node.bind_value(2, InputValue::literal(value));
        self
    }

    pub fn with_positive(self, value: impl Into<<types::CONDITIONING as SlotType>::Literal>) -> Self {
        let value: <types::CONDITIONING as SlotType>::Literal = value.into();
        self.node.bind_value(3, InputValue::literal(value));
        self
    }

    pub fn with_latent_image(self, value: impl Into<<types::LATENT as SlotType>::Literal>) -> Self {
        let value: <types::LATENT as SlotType>::Literal = value.into();
        self.node.bind_value(4, InputValue::literal(value));
        self
    }

    pub fn with_denoise(self, value: impl Into<Option<<types::FLOAT as SlotType>::Literal>>) -> Self {
        let value: Option<<types::FLOAT as SlotType>::Literal> = value.into();
        self.node.bind_value(5, InputValue::optional(value));
        self
    }

    pub fn in_0(&self) -> Input<types::MODEL> {
        Input::new(&self.node, 0)
    }

    pub fn in_model(&self) -> Input<types::MODEL> {
        Input::new(&self.node, 0)
    }

    pub fn in_1(&self) -> Input<types::INT> {
        Input::new(&self.node, 1)
    }

    pub fn in_seed(&self) -> Input<types::INT> {
        Input::new(&self.node, 1)
    }

    pub fn in_2(&self) -> Input<types::KSampler_sampler_name> {
        Input::new(&self.node, 2)
    }

    pub fn in_sampler_name(&self) -> Input<types::KSampler_sampler_name> {
        Input::new(&self.node, 2)
    }

    pub fn in_3(&self) -> Input<types::CONDITIONING> {
        Input::new(&self.node, 3)
    }

    pub fn in_positive(&self) -> Input<types::CONDITIONING> {
        Input::new(&self.node, 3)
    }

    pub fn in_4(&self) -> Input<types::LATENT> {
        Input::new(&self.node, 4)
    }

    pub fn in_latent_image(&self) -> Input<types::LATENT> {
        Input::new(&self.node, 4)
    }

    pub fn in_5(&self) -> Input<types::FLOAT> {
        Input::new(&self.node, 5)
    }

    pub fn in_denoise(&self) -> Input<types::FLOAT> {
        Input::new(&self.node, 5)
    }

    pub fn input(&self, key: impl Into<SlotKey>) -> Result<InputHandle, GraphError> {
        self.node.input(key)
    }

    pub fn out_0(&self) -> Output<types::LATENT> {
        Output::new(&self.node, 0)
    }

    pub fn out_LATENT(&self) -> Output<types::LATENT> {
        Output::new(&self.node, 0)
    }

    pub fn output(&self, key: impl Into<SlotKey>) -> Result<OutputHandle, GraphError> {
        self.node.output(key)
    }
}

impl Default for KSampler_0003 {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Node> for KSampler_0003 {
    fn as_ref(&self) -> &Node {
        &self.node
    }
}

/// Builder for `VAEDecode`.
pub struct VAEDecode_0004 {
    node: Node,
}

impl VAEDecode_0004 {
    pub const TYPE_NAME: &'static str = "VAEDecode";
    pub const INPUT_LENGTH: usize = 2;
    pub const OUTPUT_LENGTH: usize = 1;

    pub fn new() -> Self {
        let node = Node::new(Self::TYPE_NAME);
        node.register_input("samples", <types::LATENT as SlotType>::value_type(), InputValue::PendingLink);
        node.register_input("vae", <types::VAE as SlotType>::value_type(), InputValue::PendingLink);
        node.register_output(Some("IMAGE"), <types::IMAGE as SlotType>::value_type());
        Self { node }
    }

    /// Creates the node and registers it with `scope`.
    pub fn new_in(scope: &mut Scope<'_>) -> Self {
        let this = Self::new();
        scope.add(&this);
        this
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn with_samples(self, value: impl Into<<types::LATENT as SlotType>::Literal>) -> Self {
        let value: <types::LATENT as SlotType>::Literal = value.into();
        self.node.bind_value(0, InputValue::literal(value));
        self
    }

    pub fn with_vae(self, value: impl Into<<types::VAE as SlotType>::Literal>) -> Self {
        let value: <types::VAE as SlotType>::Literal = value.into();
        self.node.bind_value(1, InputValue::literal(value));
        self
    }

    pub fn in_0(&self) -> Input<types::LATENT> {
        Input::new(&self.node, 0)
    }

    pub fn in_samples(&self) -> Input<types::LATENT> {
        Input::new(&self.node, 0)
    }

    pub fn in_1(&self) -> Input<types::VAE> {
        Input::new(&self.node, 1)
    }

    pub fn in_vae(&self) -> Input<types::VAE> {
        Input::new(&self.node, 1)
    }

    pub fn input(&self, key: impl Into<SlotKey>) -> Result<InputHandle, GraphError> {
        self.node.input(key)
    }

    pub fn out_0(&self) -> Output<types::IMAGE> {
        Output::new(&self.node, 0)
    }

    pub fn out_IMAGE(&self) -> Output<types::IMAGE> {
        Output::new(&self.node, 0)
    }

    pub fn output(&self, key: impl Into<SlotKey>) -> Result<OutputHandle, GraphError> {
        self.node.output(key)
    }
}

impl Default for VAEDecode_0004 {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Node> for VAEDecode_0004 {
    fn as_ref(&self) -> &Node {
        &self.node
    }
}

/// Builder for `SaveImage`.
pub struct SaveImage_0005 {
    node: Node,
}

impl SaveImage_0005 {
    pub const TYPE_NAME: &'static str = "SaveImage";
    pub const INPUT_LENGTH: usize = 2;
    pub const OUTPUT_LENGTH: usize = 0;

    pub fn new() -> Self {
        let node = Node::new(Self::TYPE_NAME);
        node.register_input("images", <types::IMAGE as SlotType>::value_type(), InputValue::PendingLink);
        node.register_input("filename_prefix", <types::STRING as SlotType>::value_type(), InputValue::literal("ComfyUI"));
        Self { node }
    }

    /// Creates the node and registers it with `scope`.
    pub fn new_in(scope: &mut Scope<'_>) -> Self {
        let this = Self::new();
        scope.add(&this);
        this
    }

    pub fn node(&self) -> &Node {
        &self.node
    }

    pub fn with_images(self, value: impl Into<<types::IMAGE as SlotType>::Literal>) -> Self {
        let value: <types::IMAGE as SlotType>::Literal = value.into();
        self.node.bind_value(0, InputValue::literal(value));
        self
    }

    pub fn with_filename_prefix(self, value: impl Into<Option<<types::STRING as SlotType>::Literal>>) -> Self {
        let value: Option<<types::STRING as SlotType>::Literal> = value.into();
        self.node.bind_value(1, InputValue::optional(value));
        self
    }

    pub fn in_0(&self) -> Input<types::IMAGE> {
        Input::new(&self.node, 0)
    }

    pub fn in_images(&self) -> Input<types::IMAGE> {
        Input::new(&self.node, 0)
    }

    pub fn in_1(&self) -> Input<types::STRING> {
        Input::new(&self.node, 1)
    }

    pub fn in_filename_prefix(&self) -> Input<types::STRING> {
        Input::new(&self.node, 1)
    }

    pub fn input(&self, key: impl Into<SlotKey>) -> Result<InputHandle, GraphError> {
        self.node.input(key)
    }

    pub fn output(&self, key: impl Into<SlotKey>) -> Result<OutputHandle, GraphError> {
        self.node.output(key)
    }
}

impl Default for SaveImage_0005 {
    fn default() -> Self {
        Self::new()
    }
}

impl AsRef<Node> for SaveImage_0005 {
    fn as_ref(&self) -> &Node {
        &self.node
    }
}

/// Builders grouped by host category.
pub mod nodes {
    pub mod loaders {
        pub use super::super::CheckpointLoaderSimple_0000 as CheckpointLoaderSimple;
    }
    pub mod conditioning {
        pub use super::super::CLIPTextEncode_0001 as CLIPTextEncode;
    }
    pub mod latent {
        pub use super::super::EmptyLatentImage_0002 as EmptyLatentImage;
        pub use super::super::VAEDecode_0004 as VAEDecode;
    }
    pub mod sampling {
        pub use super::super::KSampler_0003 as KSampler;
    }
    pub mod image {
        pub use super::super::SaveImage_0005 as SaveImage;
    }
}
