//! Interrupt bindings for the peripherals the trainer drives asynchronously.

::embassy_rp::bind_interrupts! {
    pub struct Pio0Irqs {
        PIO0_IRQ_0 => ::embassy_rp::pio::InterruptHandler<::embassy_rp::peripherals::PIO0>;
    }
}

::embassy_rp::bind_interrupts! {
    pub struct Pio1Irqs {
        PIO1_IRQ_0 => ::embassy_rp::pio::InterruptHandler<::embassy_rp::peripherals::PIO1>;
    }
}

::embassy_rp::bind_interrupts! {
    pub struct AdcIrqs {
        ADC_IRQ_FIFO => ::embassy_rp::adc::InterruptHandler;
    }
}
