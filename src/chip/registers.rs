/// first address of the read only measurement / energy range
const MEASUREMENT_BASE: u8 = 0x40;

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
#[repr(u8)]
pub enum Reg {
    /// software reset, write 0x789A to reset
    SoftReset = 0x00,
    /// system status, checksum errors and warnings
    SysStatus = 0x01,
    /// function enable
    FuncEn = 0x02,
    /// voltage sag threshold
    SagTh = 0x03,
    /// last read / write SPI data
    LastData = 0x06,
    /// LSB of the last read / write SPI value
    Lsb = 0x08,

    /// calibration start command
    CalStart = 0x20,
    /// high word of the meter constant
    PLconstH = 0x21,
    /// low word of the meter constant
    PLconstL = 0x22,
    /// L line calibration gain
    Lgain = 0x23,
    /// L line calibration angle
    Lphi = 0x24,
    /// N line calibration gain
    Ngain = 0x25,
    /// N line calibration angle
    Nphi = 0x26,
    /// active startup power threshold
    PStartTh = 0x27,
    /// active no-load power threshold
    PNolTh = 0x28,
    /// reactive startup power threshold
    QStartTh = 0x29,
    /// reactive no-load power threshold
    QNolTh = 0x2A,
    /// metering mode configuration
    MMode = 0x2B,
    /// checksum 1
    CSOne = 0x2C,

    /// measurement calibration start command
    AdjStart = 0x30,
    /// voltage rms gain
    Ugain = 0x31,
    /// L line current rms gain
    IgainL = 0x32,
    /// N line current rms gain
    IgainN = 0x33,
    /// voltage offset
    Uoffset = 0x34,
    /// L line current offset
    IoffsetL = 0x35,
    /// N line current offset
    IoffsetN = 0x36,
    /// L line active power offset
    PoffsetL = 0x37,
    /// L line reactive power offset
    QoffsetL = 0x38,
    /// N line active power offset
    PoffsetN = 0x39,
    /// N line reactive power offset
    QoffsetN = 0x3A,
    /// checksum 2
    CSTwo = 0x3B,

    /// forward active energy
    APenergy = 0x40,
    /// reverse active energy
    ANenergy = 0x41,
    /// absolute active energy
    ATenergy = 0x42,
    /// forward (inductive) reactive energy
    RPenergy = 0x43,
    /// reverse (capacitive) reactive energy
    RNenergy = 0x44,
    /// absolute reactive energy
    RTenergy = 0x45,
    /// metering status
    EnStatus = 0x46,

    /// L line current rms
    Irms = 0x48,
    /// voltage rms
    Urms = 0x49,
    /// L line mean active power
    Pmean = 0x4A,
    /// L line mean reactive power
    Qmean = 0x4B,
    /// voltage frequency
    Freq = 0x4C,
    /// L line power factor
    PowerF = 0x4D,
    /// phase angle between voltage and L line current
    Pangle = 0x4E,
    /// L line mean apparent power
    Smean = 0x4F,

    /// N line current rms
    IrmsN = 0x68,
}

impl Reg {
    /// block covered by CS1, in address order
    pub const CALIBRATION_BLOCK: [Reg; 11] = [
        Reg::PLconstH,
        Reg::PLconstL,
        Reg::Lgain,
        Reg::Lphi,
        Reg::Ngain,
        Reg::Nphi,
        Reg::PStartTh,
        Reg::PNolTh,
        Reg::QStartTh,
        Reg::QNolTh,
        Reg::MMode,
    ];

    /// block covered by CS2, in address order
    pub const ADJUSTMENT_BLOCK: [Reg; 10] = [
        Reg::Ugain,
        Reg::IgainL,
        Reg::IgainN,
        Reg::Uoffset,
        Reg::IoffsetL,
        Reg::IoffsetN,
        Reg::PoffsetL,
        Reg::QoffsetL,
        Reg::PoffsetN,
        Reg::QoffsetN,
    ];

    const ALL: [Reg; 47] = [
        Reg::SoftReset,
        Reg::SysStatus,
        Reg::FuncEn,
        Reg::SagTh,
        Reg::LastData,
        Reg::Lsb,
        Reg::CalStart,
        Reg::PLconstH,
        Reg::PLconstL,
        Reg::Lgain,
        Reg::Lphi,
        Reg::Ngain,
        Reg::Nphi,
        Reg::PStartTh,
        Reg::PNolTh,
        Reg::QStartTh,
        Reg::QNolTh,
        Reg::MMode,
        Reg::CSOne,
        Reg::AdjStart,
        Reg::Ugain,
        Reg::IgainL,
        Reg::IgainN,
        Reg::Uoffset,
        Reg::IoffsetL,
        Reg::IoffsetN,
        Reg::PoffsetL,
        Reg::QoffsetL,
        Reg::PoffsetN,
        Reg::QoffsetN,
        Reg::CSTwo,
        Reg::APenergy,
        Reg::ANenergy,
        Reg::ATenergy,
        Reg::RPenergy,
        Reg::RNenergy,
        Reg::RTenergy,
        Reg::EnStatus,
        Reg::Irms,
        Reg::Urms,
        Reg::Pmean,
        Reg::Qmean,
        Reg::Freq,
        Reg::PowerF,
        Reg::Pangle,
        Reg::Smean,
        Reg::IrmsN,
    ];

    pub fn addr(&self) -> u8 {
        *self as u8
    }

    pub fn from_addr(addr: u8) -> Option<Reg> {
        Self::ALL.iter().copied().find(|reg| reg.addr() == addr)
    }

    /// configuration and calibration registers can be written, measurements are read only
    pub fn is_writable(&self) -> bool {
        self.addr() < MEASUREMENT_BASE
    }
}
