use crate::controllers::interactive::data::frame_data::FrameData;
use crate::core::data::pixel_buffer::PixelBufferError;
use crate::input::gui::ports::presenter::GuiPresenterPort;
use egui::Context as EguiContext;
use egui_wgpu::Renderer as EguiRenderer;
use pixels::Pixels;
use pixels::SurfaceTexture;
use pixels::wgpu;
use winit::window::Window;

/// Fractal frames in a pixels framebuffer with the egui panel drawn on top.
pub struct PixelsPresenter {
    pixels: Pixels<'static>,
    egui_renderer: EguiRenderer,
    width: u32,
    height: u32,
}

impl PixelsPresenter {
    pub fn new(window: &'static Window) -> Result<Self, pixels::Error> {
        let size = window.inner_size();
        let surface_texture = SurfaceTexture::new(size.width, size.height, window);
        let pixels = Pixels::new(size.width, size.height, surface_texture)?;

        let egui_renderer = EguiRenderer::new(
            pixels.device(),
            pixels.render_texture_format(),
            None, // depth format
            1,    // msaa samples
        );

        Ok(Self {
            pixels,
            egui_renderer,
            width: size.width,
            height: size.height,
        })
    }
}

impl GuiPresenterPort for PixelsPresenter {
    fn show_frame(&mut self, frame: &FrameData) -> Result<(), PixelBufferError> {
        frame.pixel_buffer.write_rgba(self.pixels.frame_mut())
    }

    fn render(&mut self, egui_output: egui::FullOutput, egui_ctx: &EguiContext) -> Result<(), pixels::Error> {
        if self.width == 0 || self.height == 0 {
            return Ok(());
        }

        let egui_renderer = &mut self.egui_renderer;
        let size_in_pixels = [self.width, self.height];

        self.pixels.render_with(|encoder, render_target, context| {
            context.scaling_renderer.render(encoder, render_target);

            let clipped_primitives =
                egui_ctx.tessellate(egui_output.shapes, egui_ctx.pixels_per_point());

            let screen_descriptor = egui_wgpu::ScreenDescriptor {
                size_in_pixels,
                pixels_per_point: egui_ctx.pixels_per_point(),
            };

            let textures_delta = egui_output.textures_delta;

            for (id, delta) in &textures_delta.set {
                egui_renderer.update_texture(&context.device, &context.queue, *id, delta);
            }

            egui_renderer.update_buffers(
                &context.device,
                &context.queue,
                encoder,
                &clipped_primitives,
                &screen_descriptor,
            );

            {
                let mut render_pass = encoder.begin_render_pass(&wgpu::RenderPassDescriptor {
                    label: Some("egui"),
                    color_attachments: &[Some(wgpu::RenderPassColorAttachment {
                        view: render_target,
                        resolve_target: None,
                        ops: wgpu::Operations {
                            // keep the fractal underneath
                            load: wgpu::LoadOp::Load,
                            store: wgpu::StoreOp::Store,
                        },
                    })],
                    depth_stencil_attachment: None,
                    ..Default::default()
                });

                egui_renderer.render(&mut render_pass, &clipped_primitives, &screen_descriptor);
            }

            for id in &textures_delta.free {
                egui_renderer.free_texture(id);
            }

            Ok(())
        })
    }

    fn resize(&mut self, width: u32, height: u32) -> Result<(), pixels::TextureError> {
        self.width = width;
        self.height = height;

        if width == 0 || height == 0 {
            return Ok(());
        }

        self.pixels.resize_surface(width, height)?;
        self.pixels.resize_buffer(width, height)
    }
}
